#[cfg(test)]
mod tests {
    use crate::core::config::SessionSettings;
    use crate::core::session::{GarageSession, SessionState};
    use std::io::Cursor;

    fn session(script: &str) -> GarageSession<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        GarageSession::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            SessionSettings::plain(),
        )
    }

    fn output(session: GarageSession<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_menu_transitions() {
        let mut s = session("1\n2\n3\n4\n6\n");
        assert_eq!(
            s.step(SessionState::MenuDisplayed).unwrap(),
            SessionState::AwaitingCreateInputs
        );
        assert_eq!(
            s.step(SessionState::MenuDisplayed).unwrap(),
            SessionState::AwaitingAddChoice
        );
        assert_eq!(
            s.step(SessionState::MenuDisplayed).unwrap(),
            SessionState::AwaitingRemoveId
        );
        assert_eq!(
            s.step(SessionState::MenuDisplayed).unwrap(),
            SessionState::AwaitingSearchId
        );
        assert_eq!(
            s.step(SessionState::MenuDisplayed).unwrap(),
            SessionState::Exiting
        );
    }

    #[test]
    fn test_invalid_selection_redisplays_menu() {
        let mut s = session("9\n");
        assert_eq!(
            s.step(SessionState::MenuDisplayed).unwrap(),
            SessionState::MenuDisplayed
        );
        assert!(output(s).contains("PLEASE SELECT A VALID MENU OPTION"));
    }

    #[test]
    fn test_showcase_stays_on_menu() {
        let mut s = session("5\n");
        assert_eq!(
            s.step(SessionState::MenuDisplayed).unwrap(),
            SessionState::MenuDisplayed
        );
        assert!(output(s).contains("There are no cars currently in the garage"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut s = session("");
        assert_eq!(
            s.step(SessionState::MenuDisplayed).unwrap(),
            SessionState::Exiting
        );
    }

    #[test]
    fn test_create_registers_in_holding_area_only() {
        let mut s = session("Toyota\nCorolla\nRed\ny\n");
        assert_eq!(
            s.step(SessionState::AwaitingCreateInputs).unwrap(),
            SessionState::MenuDisplayed
        );
        assert!(s.garage().is_empty());
        assert_eq!(
            s.holding_area().get(&0).map(|c| c.to_string()).as_deref(),
            Some("[0] - Red Toyota Corolla")
        );
        assert!(output(s).contains("Created a new car: [0] - Red Toyota Corolla"));
    }

    #[test]
    fn test_create_retry_then_cancel() {
        let mut s = session("Toyota\nCorolla\nRed\nN\nFord\nFocus\nBlue\nX\n");
        s.step(SessionState::AwaitingCreateInputs).unwrap();
        assert!(s.holding_area().is_empty());

        let text = output(s);
        assert!(text.contains("Please confirm you want to create a Red Toyota Corolla by typing 'Y'"));
        assert!(text.contains("Please confirm you want to create a Blue Ford Focus by typing 'Y'"));
        assert!(!text.contains("Created a new car"));
    }

    #[test]
    fn test_create_requires_every_field() {
        let mut s = session("Toyota\n\nRed\nY\nToyota\nCorolla\nRed\nY\n");
        s.step(SessionState::AwaitingCreateInputs).unwrap();
        assert_eq!(s.holding_area().len(), 1);
        assert!(output(s).contains("make, model and colour are all required"));
    }

    #[test]
    fn test_create_cancelled_by_end_of_input() {
        let mut s = session("Toyota\nCorolla\n");
        assert_eq!(
            s.step(SessionState::AwaitingCreateInputs).unwrap(),
            SessionState::MenuDisplayed
        );
        assert!(s.holding_area().is_empty());
    }

    #[test]
    fn test_add_new_car_goes_straight_to_garage() {
        let mut s = session("\nHonda\nCivic\nGreen\nY\n");
        s.step(SessionState::AwaitingAddChoice).unwrap();
        assert!(s.holding_area().is_empty());
        assert!(s.garage().contains(0));
        assert!(output(s).contains("Successfully added the car to the garage: [0] - Green Honda Civic"));
    }

    #[test]
    fn test_add_malformed_id_returns_to_menu() {
        let mut s = session("abc\n");
        assert_eq!(
            s.step(SessionState::AwaitingAddChoice).unwrap(),
            SessionState::MenuDisplayed
        );
        assert!(output(s).contains("Invalid car id 'abc'"));
    }

    #[test]
    fn test_add_unknown_id() {
        let mut s = session("3\n");
        s.step(SessionState::AwaitingAddChoice).unwrap();
        assert!(s.garage().is_empty());
        assert!(output(s).contains("Sorry, unable to find a car with that id"));
    }

    #[test]
    fn test_remove_and_search_malformed_ids() {
        let mut s = session("-4\nforty\n");
        assert_eq!(
            s.step(SessionState::AwaitingRemoveId).unwrap(),
            SessionState::MenuDisplayed
        );
        assert_eq!(
            s.step(SessionState::AwaitingSearchId).unwrap(),
            SessionState::MenuDisplayed
        );
        let text = output(s);
        assert!(text.contains("Invalid car id '-4'"));
        assert!(text.contains("Invalid car id 'forty'"));
    }
}

// This file is the module declaration file for the `builders` module.
// It declares the console plumbing used by the interactive session.

// `prompt` module:
// Reading user input line by line and turning it into typed values: menu
// selections (`MenuOption`), the create-car confirmation token
// (`Confirmation`) and car ids (`parse_car_id`).
pub mod prompt;

// `reporter` module:
// `ConsoleReporter` writes the banner, the menu, every prompt and the outcome
// of each garage operation to any `Write` target.
pub mod reporter;

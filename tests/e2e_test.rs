// Test complete flow of the application
// Run with `cargo test --test e2e_test`

use std::fs;

use nelua_scanner::{ScannerBuilder, Token};
use regex::Regex;

#[test]
fn e2e_test() {
    // Initialize the logger
    let _ = env_logger::builder().is_test(true).try_init();

    // Initialize the regex for newlines. It is used to make the tests platform independent.
    let rx_newline: Regex = Regex::new(r"\r?\n|\r").unwrap();

    let mut inputs = 0;
    // Iterate over all input files in the data directory
    for entry in fs::read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data")).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().unwrap() != "input" {
            continue;
        }
        inputs += 1;

        println!("--------------------------------------------------");
        println!("Entry: {:?}", entry.file_name());
        println!("--------------------------------------------------");

        // An optional json file with the same base name holds the scanner configuration.
        let config_path = path.with_extension("json");
        let builder = if config_path.exists() {
            let file = fs::File::open(&config_path).unwrap();
            ScannerBuilder::from_reader(file).unwrap_or_else(|e| {
                panic!("**** Failed to read json file {}: {}", config_path.display(), e)
            })
        } else {
            ScannerBuilder::new()
        };
        let scanner = builder.build();

        let input = fs::read_to_string(&path).unwrap();
        let input = rx_newline.replace_all(&input, "\n");

        // Collect all tokens
        let tokens: Vec<Token> = scanner.find_iter(&input).collect();

        println!("Tokens:\n{}\n", serde_json::to_string(&tokens).unwrap());
        for token in &tokens {
            println!("{:?}, Kind: {} ", &input[token.range()], token.kind());
        }
        println!("Tokens count: {}", tokens.len());

        // Open the expected output file which has the same base name as the input file but
        // with a .tokens extension.
        let token_file_path = path.with_extension("tokens");
        let token_file = fs::File::open(&token_file_path).unwrap();
        let expected_tokens: Vec<Token> = serde_json::from_reader(&token_file).unwrap();

        // Compare the tokens
        assert_eq!(tokens, expected_tokens);
    }
    assert!(inputs > 0, "no input files found");
}

use relnotes::config::ConfigError;

#[test]
fn test_missing_var_messages_match_entry_point_contract() {
    // The entry point prints these Display forms verbatim before exiting 1
    assert_eq!(
        format!("{}", ConfigError::MissingVar("OPENAI_API_KEY")),
        "OPENAI_API_KEY not found."
    );
    assert_eq!(
        format!("{}", ConfigError::MissingVar("RELEASE_NOTES")),
        "RELEASE_NOTES not found."
    );
}

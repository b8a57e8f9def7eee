use super::*;

#[test]
fn new_trims_trailing_slash() {
    let config = BackendConfig::new("https://example.supabase.co/", "anon");
    assert_eq!(config.url, "https://example.supabase.co");
    assert_eq!(config.anon_key, "anon");
}

#[test]
fn new_keeps_plain_url() {
    let config = BackendConfig::new("https://example.supabase.co", "anon");
    assert_eq!(config.url, "https://example.supabase.co");
}

#[test]
fn missing_var_names_the_variable() {
    let err = ConfigError::MissingVar(URL_VAR);
    assert!(err.to_string().contains("AGENDA_SUPABASE_URL"));
}

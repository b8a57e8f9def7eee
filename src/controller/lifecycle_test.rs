use super::*;

#[test]
fn token_starts_active() {
    assert!(LifecycleToken::new().is_active());
}

#[test]
fn retire_deactivates() {
    let token = LifecycleToken::new();
    token.retire();
    assert!(!token.is_active());
}

#[test]
fn clones_share_the_flag() {
    let token = LifecycleToken::new();
    let clone = token.clone();
    token.retire();
    assert!(!clone.is_active());
}

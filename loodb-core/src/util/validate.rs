pub fn is_valid_email(email: &str) -> bool {
    fast_chemail::is_valid_email(email)
}

use keyring::Entry;

const SERVICE: &str = "fintrust_app";
const USER: &str = "fintrust_user_id";

/// Identity of the acting user. Checked once at startup; the view never
/// re-reads it and nothing in the client ever writes it back.
/// `FINTRUST_USER_ID` overrides the stored value for development.
pub fn load_user_id() -> Option<String> {
    if let Ok(id) = std::env::var("FINTRUST_USER_ID") {
        let id = id.trim().to_string();
        if !id.is_empty() {
            return Some(id);
        }
    }
    let entry = Entry::new(SERVICE, USER);
    match entry.get_password() {
        Ok(id) => {
            if id.trim().is_empty() {
                None
            } else {
                Some(id)
            }
        }
        Err(_e) => {
            // Only attempt file fallback when explicitly enabled via env var
            let allow_fallback = std::env::var("KEYRING_FALLBACK").unwrap_or_default() == "true";
            if allow_fallback {
                let path = std::path::Path::new("data").join("user_id.txt");
                if path.exists() {
                    if let Ok(s) = std::fs::read_to_string(&path) {
                        let id = s.trim().to_string();
                        if !id.is_empty() {
                            return Some(id);
                        }
                    }
                }
            }
            None
        }
    }
}

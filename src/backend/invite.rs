use rand::Rng;

use crate::constants::{INVITE_CODE_CHARSET, INVITE_CODE_LEN};

/// Random upper-case alphanumeric invite code
pub fn generate_invite_code() -> String {
    let mut rng = rand::rng();
    (0..INVITE_CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..INVITE_CODE_CHARSET.len());
            INVITE_CODE_CHARSET[idx] as char
        })
        .collect()
}

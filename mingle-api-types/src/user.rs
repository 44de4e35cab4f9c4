use serde::{Deserialize, Serialize};

/// A member of the roster served by `GET /users`.
///
/// `GET /current-user` returns the same shape, or JSON `null` when nobody is
/// signed in.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq, Clone)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_roster_payload() {
        let json = r#"[
            {"id": 1, "name": "John Doe", "avatar": "http://localhost:4000/avatars/1.png"},
            {"id": 2, "name": "Jane Smith", "avatar": "http://localhost:4000/avatars/2.png"}
        ]"#;
        let users: Vec<User> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].avatar, "http://localhost:4000/avatars/2.png");
    }

    #[test]
    fn null_current_user_decodes_to_none() {
        let current: Option<User> = serde_json::from_str("null").unwrap();
        assert_eq!(current, None);
        let current: Option<User> =
            serde_json::from_str(r#"{"id": 7, "name": "Ada", "avatar": ""}"#).unwrap();
        assert_eq!(current.map(|u| u.id), Some(7));
    }
}

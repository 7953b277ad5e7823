//! SessionStore - persisted sign-in state
//!
//! A flat string-keyed map saved as one JSON file. The key names and value
//! encodings are a compatibility contract with other front ends of the same
//! service: the profile is stored as the raw login-response JSON string under
//! `hd_staff`, the bearer token under `hd_token`, and the admin's branch
//! choice under `hd_selected_branch`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use shared::StaffProfile;

use crate::{ClientError, ClientResult};

const TOKEN_KEY: &str = "hd_token";
const STAFF_KEY: &str = "hd_staff";
const SELECTED_BRANCH_KEY: &str = "hd_selected_branch";

/// Session store backed by a JSON file
pub struct SessionStore {
    file_path: PathBuf,
    data: HashMap<String, String>,
}

impl SessionStore {
    /// Load the store, starting empty when the file does not exist.
    pub fn load(dir: &Path) -> ClientResult<Self> {
        let file_path = dir.join("session.json");
        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)
                .map_err(|e| ClientError::Session(e.to_string()))?;
            serde_json::from_str(&content)?
        } else {
            HashMap::new()
        };
        Ok(Self { file_path, data })
    }

    fn save(&self) -> ClientResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClientError::Session(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.file_path, content).map_err(|e| ClientError::Session(e.to_string()))
    }

    /// Persist a successful login: token and the whole profile, verbatim.
    pub fn set_login(&mut self, profile: &StaffProfile) -> ClientResult<()> {
        self.data
            .insert(TOKEN_KEY.to_string(), profile.access_token.clone());
        self.data
            .insert(STAFF_KEY.to_string(), serde_json::to_string(profile)?);
        self.save()?;
        tracing::debug!(name = %profile.name, "Session persisted");
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.data.get(TOKEN_KEY).map(String::as_str)
    }

    /// The signed-in profile, or `None` when absent or unreadable.
    pub fn staff(&self) -> Option<StaffProfile> {
        let raw = self.data.get(STAFF_KEY)?;
        serde_json::from_str(raw).ok()
    }

    pub fn selected_branch(&self) -> Option<&str> {
        self.data.get(SELECTED_BRANCH_KEY).map(String::as_str)
    }

    /// Remember the branch an admin picked, surviving restarts.
    pub fn set_selected_branch(&mut self, branch_id: &str) -> ClientResult<()> {
        self.data
            .insert(SELECTED_BRANCH_KEY.to_string(), branch_id.to_string());
        self.save()
    }

    /// Drop everything; called on logout and on a 401.
    pub fn clear(&mut self) -> ClientResult<()> {
        self.data.clear();
        self.save()
    }

    /// Restaurant claim from the stored token's payload.
    ///
    /// The token is a JWT; its payload (base64url, unverified) carries a
    /// `restaurant_id` claim used when the profile has no branch pinned.
    pub fn restaurant_id(&self) -> Option<String> {
        decode_claim(self.token()?, "restaurant_id")
    }
}

fn decode_claim(token: &str, claim: &str) -> Option<String> {
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get(claim)?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::StaffRole;

    fn profile(token: &str) -> StaffProfile {
        StaffProfile {
            access_token: token.to_string(),
            token_type: "bearer".to_string(),
            role: StaffRole::BranchAdmin,
            name: "Ravi".to_string(),
            branch_id: None,
        }
    }

    #[test]
    fn test_persists_under_compat_key_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path()).unwrap();
        store.set_login(&profile("tok-1")).unwrap();
        store.set_selected_branch("b-7").unwrap();

        let content = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
        let map: HashMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(map["hd_token"], "tok-1");
        assert_eq!(map["hd_selected_branch"], "b-7");
        let staff: serde_json::Value = serde_json::from_str(&map["hd_staff"]).unwrap();
        assert_eq!(staff["role"], "BRANCH_ADMIN");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_reload_restores_profile() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = SessionStore::load(dir.path()).unwrap();
            store.set_login(&profile("tok-2")).unwrap();
        }
        let store = SessionStore::load(dir.path()).unwrap();
        assert_eq!(store.token(), Some("tok-2"));
        assert_eq!(store.staff().unwrap().name, "Ravi");
    }

    #[test]
    fn test_clear_wipes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path()).unwrap();
        store.set_login(&profile("tok-3")).unwrap();
        store.clear().unwrap();
        assert!(store.token().is_none());
        assert!(store.staff().is_none());
        assert!(store.selected_branch().is_none());
    }

    #[test]
    fn test_restaurant_claim_from_token_payload() {
        use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
        let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"s1","restaurant_id":"r-42"}"#);
        let token = format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig");

        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path()).unwrap();
        store.set_login(&profile(&token)).unwrap();
        assert_eq!(store.restaurant_id().as_deref(), Some("r-42"));
    }

    #[test]
    fn test_malformed_token_yields_no_claim() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path()).unwrap();
        store.set_login(&profile("not-a-jwt")).unwrap();
        assert!(store.restaurant_id().is_none());
    }
}

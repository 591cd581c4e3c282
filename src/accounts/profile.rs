use crate::accounts::store::{Identity, UserStore};
use crate::accounts::current_user;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

lazy_static! {
    static ref SIZED_AVATAR: Regex = Regex::new(r"=s\d+|[?&]sz=\d+").unwrap();
}

/// Clean up an avatar URL from the store or the identity provider.
///
/// Blank, "null" and "undefined" values and anything that is not an
/// absolute http(s) URL or a site path are dropped. Google avatars without
/// an explicit size get a 160px square crop.
pub fn normalize_avatar(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    let lowered = value.to_lowercase();
    if value.is_empty() || lowered == "null" || lowered == "undefined" {
        return None;
    }

    let usable = value.starts_with("http://") || value.starts_with("https://") || value.starts_with('/');
    if !usable {
        return None;
    }

    if value.contains("googleusercontent.com") && !SIZED_AVATAR.is_match(value) {
        return Some(format!("{}=s160-c", value));
    }
    Some(value.to_string())
}

/// Stored avatar, else the session's, else the placeholder
pub fn resolve_avatar(stored: Option<&str>, session: Option<&str>) -> String {
    normalize_avatar(stored)
        .or_else(|| normalize_avatar(session))
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub avatar: String,
}

impl Default for ProfileFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            bio: String::new(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
        }
    }
}

/// Fills profile fields from the user store
pub struct ProfileLoader;

impl ProfileLoader {
    /// Fetch (or create) the session user's record and copy name, email and
    /// avatar into `fields`. Any failure leaves `fields` untouched; returns
    /// whether they were updated.
    pub async fn load<S: UserStore + ?Sized>(store: &S, session: &Identity, fields: &mut ProfileFields) -> bool {
        let user = match current_user(store, Some(session)).await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Failed to load profile, keeping current values");
                return false;
            }
        };

        fields.name = user.name.clone().unwrap_or_default();
        fields.email = user.email.clone();
        fields.avatar = resolve_avatar(user.avatar.as_deref(), session.picture.as_deref());
        info!(user_id = %user.id, "Loaded profile");
        true
    }

    /// Same as [`ProfileLoader::load`], writing the loaded values through
    /// the editor so saved and in-progress fields both pick them up.
    pub async fn load_into<S: UserStore + ?Sized>(store: &S, session: &Identity, editor: &mut ProfileEditor) -> bool {
        let mut loaded = editor.saved().clone();
        if !Self::load(store, session, &mut loaded).await {
            return false;
        }
        editor.apply_loaded(&loaded);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Location,
    Bio,
}

/// Edit-in-place for the profile page: edits go to a scratch copy until
/// saved.
#[derive(Debug, Clone, Default)]
pub struct ProfileEditor {
    saved: ProfileFields,
    scratch: Option<ProfileFields>,
}

impl ProfileEditor {
    pub fn new(saved: ProfileFields) -> Self {
        Self { saved, scratch: None }
    }

    pub fn saved(&self) -> &ProfileFields {
        &self.saved
    }

    pub fn is_editing(&self) -> bool {
        self.scratch.is_some()
    }

    /// Fields as currently displayed
    pub fn current(&self) -> &ProfileFields {
        self.scratch.as_ref().unwrap_or(&self.saved)
    }

    pub fn begin(&mut self) {
        self.scratch = Some(self.saved.clone());
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        let Some(scratch) = self.scratch.as_mut() else {
            return false;
        };
        let value = value.into();
        match field {
            ProfileField::Name => scratch.name = value,
            ProfileField::Email => scratch.email = value,
            ProfileField::Phone => scratch.phone = value,
            ProfileField::Location => scratch.location = value,
            ProfileField::Bio => scratch.bio = value,
        }
        true
    }

    pub fn save(&mut self) {
        if let Some(scratch) = self.scratch.take() {
            self.saved = scratch;
        }
    }

    pub fn cancel(&mut self) {
        self.scratch = None;
    }

    /// Copy store-owned fields (name, email, avatar) into the saved values
    /// and into an open edit. Phone, location and bio edits are kept.
    pub fn apply_loaded(&mut self, loaded: &ProfileFields) {
        for fields in std::iter::once(&mut self.saved).chain(self.scratch.as_mut()) {
            fields.name = loaded.name.clone();
            fields.email = loaded.email.clone();
            fields.avatar = loaded.avatar.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_and_sentinel_avatars() {
        assert_eq!(normalize_avatar(None), None);
        assert_eq!(normalize_avatar(Some("   ")), None);
        assert_eq!(normalize_avatar(Some("null")), None);
        assert_eq!(normalize_avatar(Some("Undefined")), None);
        assert_eq!(normalize_avatar(Some("data:image/png;base64,AAA")), None);
    }

    #[test]
    fn keeps_site_paths_and_urls() {
        assert_eq!(normalize_avatar(Some(" /me.png ")).as_deref(), Some("/me.png"));
        assert_eq!(
            normalize_avatar(Some("https://cdn.example.com/a.jpg")).as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn sizes_google_avatars() {
        let bare = "https://lh3.googleusercontent.com/a/ACg8oc";
        assert_eq!(normalize_avatar(Some(bare)), Some(format!("{}=s160-c", bare)));

        let sized = "https://lh3.googleusercontent.com/a/ACg8oc=s96-c";
        assert_eq!(normalize_avatar(Some(sized)).as_deref(), Some(sized));

        let query = "https://lh3.googleusercontent.com/photo.jpg?sz=50";
        assert_eq!(normalize_avatar(Some(query)).as_deref(), Some(query));
    }

    #[test]
    fn avatar_resolution_order() {
        assert_eq!(resolve_avatar(Some("/db.png"), Some("/session.png")), "/db.png");
        assert_eq!(resolve_avatar(Some("null"), Some("/session.png")), "/session.png");
        assert_eq!(resolve_avatar(None, Some("")), PLACEHOLDER_AVATAR);
    }

    #[test]
    fn editor_commits_only_on_save() {
        let mut editor = ProfileEditor::new(ProfileFields::default());
        assert!(!editor.set(ProfileField::Name, "ignored"));

        editor.begin();
        editor.set(ProfileField::Name, "Neo");
        assert_eq!(editor.current().name, "Neo");
        assert_eq!(editor.saved().name, "");
        editor.cancel();
        assert_eq!(editor.current().name, "");

        editor.begin();
        editor.set(ProfileField::Bio, "Landlord in Maun");
        editor.save();
        assert!(!editor.is_editing());
        assert_eq!(editor.saved().bio, "Landlord in Maun");
    }

    #[test]
    fn loaded_values_reach_saved_and_open_edit() {
        let mut editor = ProfileEditor::new(ProfileFields::default());
        editor.begin();
        editor.set(ProfileField::Phone, "+267 72 111 222");

        let loaded = ProfileFields {
            name: "Lesedi".into(),
            email: "lesedi@example.com".into(),
            avatar: "/me.png".into(),
            ..Default::default()
        };
        editor.apply_loaded(&loaded);

        assert_eq!(editor.saved().name, "Lesedi");
        assert_eq!(editor.saved().avatar, "/me.png");
        assert_eq!(editor.current().email, "lesedi@example.com");
        assert_eq!(editor.current().phone, "+267 72 111 222");
        assert_eq!(editor.saved().phone, "");
    }
}

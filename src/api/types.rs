use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as returned by `GET /api/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Avatar URL. The terminal can't show the image, so the header renders
    /// an initial badge with the name as its label instead.
    pub picture: String,
}

/// Motivational quote from `GET /api/quote`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// One vocabulary entry from `GET /api/words`. Immutable once fetched;
/// `id` is the stable key used for the notes endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub polish_translation: String,
    pub example_sentence_1: String,
    pub example_sentence_2: String,
    pub example_sentence_3: String,
}

impl Word {
    pub fn examples(&self) -> [&str; 3] {
        [
            &self.example_sentence_1,
            &self.example_sentence_2,
            &self.example_sentence_3,
        ]
    }
}

/// Body of `GET /api/notes/{id}`. The backend omits or empties `notes`
/// when no note exists, so a missing field reads as an empty note.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NoteBody {
    #[serde(default)]
    pub notes: Option<String>,
}

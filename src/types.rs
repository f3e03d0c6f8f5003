use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Short-lived bearer token obtained from the refresh-token grant.
///
/// Requested once per request flow and discarded afterwards; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    // local or removed tracks come back as null
    pub track: Option<TrackArtists>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtists {
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralArtistsResponse {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub id: String,
}

/// The generated aura bundle for a playlist's genre mix.
///
/// Field names serialize as camelCase because the record is exactly the JSON
/// object the model is prompted to emit; cached records keep that shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuraRecord {
    pub aura_score: f64,
    pub aura_colors: AuraColors,
    pub translations: Translations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuraColors {
    pub primary: AuraColor,
    pub secondary: AuraColor,
    pub gradient_position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuraColor {
    pub hex: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translations {
    pub english: AuraText,
    pub indonesian: AuraText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuraText {
    pub music_nickname: String,
    pub key_point: String,
    pub aura_description: String,
    pub color_meanings: ColorMeanings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorMeanings {
    pub primary: String,
    pub secondary: String,
}

/// Body of `POST /api/aura`.
///
/// The share page posts only the key parts; the form flow also posts the
/// sampled genres so a missing cache entry can be generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuraRequest {
    pub user_id: String,
    pub playlist_id: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "topP")]
    pub top_p: f64,
    #[serde(rename = "topK")]
    pub top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

// Test data: fixture profiles and unique-value generation
//
// Uniqueness of generated emails and login names is the caller's
// responsibility, done with a timestamp plus a random suffix; nothing
// downstream enforces it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::Local;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Deserialize;

use crate::error::{Error, Result};

/// One user profile from the read-only JSON fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub telephone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub address: String,
    pub city: String,
    /// State/province, as visible text in the zone dropdown.
    pub zone: String,
    pub postcode: String,
    /// Country, as visible text in the country dropdown.
    pub country: String,
    pub loginname: String,
    pub password: String,
}

/// Loads every profile from a JSON file keyed by semantic name.
pub fn load_profiles(path: &Path) -> Result<HashMap<String, UserProfile>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Loads one named profile.
pub fn profile(path: &Path, name: &str) -> Result<UserProfile> {
    let mut profiles = load_profiles(path)?;
    profiles
        .remove(name)
        .ok_or_else(|| Error::UnknownProfile(name.to_string()))
}

fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect()
}

fn timestamp() -> String {
    Local::now().format("%Y%m%d%H%M%S%3f").to_string()
}

/// A fresh `<prefix>_<timestamp>_<random>@example.com` address.
pub fn unique_email(prefix: &str) -> String {
    format!("{}_{}_{}@example.com", prefix, timestamp(), random_suffix(6))
}

/// A fresh login name with the same suffixing scheme.
pub fn unique_login(prefix: &str) -> String {
    format!("{}_{}_{}", prefix, timestamp(), random_suffix(4))
}

/// A random digit string, e.g. for telephone fields.
pub fn random_digits(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}

/// A random password with letters, digits, and punctuation.
pub fn random_password(len: usize) -> String {
    const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";
    let len = len.max(8);
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect()
}

//! Append-only user registry.
//!
//! Registered users are appended to a plain-text file, one record per line,
//! with file locking to keep the append and scan paths safe. Uniqueness
//! checks parse each record into structured fields and compare exact values
//! rather than substring-scanning the raw line, so "bob" is never shadowed
//! by "bob2".

use crate::{FitnessLevel, Result, UserProfile};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Field markers, in record order. The first has no leading separator.
const FIELD_MARKERS: [&str; 8] = [
    "Username: ",
    ", Password: ",
    ", Email: ",
    ", Age: ",
    ", Fitness Level: ",
    ", Goals: ",
    ", Illnesses: ",
    ", Surgeries: ",
];

/// Flat-file user store with advisory locking
pub struct UserRegistry {
    path: PathBuf,
}

impl UserRegistry {
    /// Create a registry backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append one user record under an exclusive lock.
    ///
    /// The write is buffered and flushed before the lock is released, so a
    /// record is either fully on disk or not written at all.
    pub fn append(&self, profile: &UserProfile) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let result = (|| -> Result<()> {
            let mut writer = std::io::BufWriter::new(&file);
            writer.write_all(format_record(profile).as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            Ok(())
        })();

        file.unlock()?;
        result?;

        tracing::debug!("Appended user '{}' to registry", profile.username);
        Ok(())
    }

    /// Read all user records under a shared lock.
    ///
    /// Malformed lines are logged and skipped rather than failing the scan.
    pub fn load_all(&self) -> Result<Vec<UserProfile>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        file.lock_shared()?;

        let reader = BufReader::new(&file);
        let mut users = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = match line_result {
                Ok(line) => line,
                Err(e) => {
                    file.unlock()?;
                    return Err(e.into());
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_record(&line) {
                Ok(profile) => users.push(profile),
                Err(e) => {
                    tracing::warn!("Skipping malformed record at line {}: {}", line_num + 1, e);
                }
            }
        }

        file.unlock()?;
        tracing::debug!("Read {} users from registry", users.len());
        Ok(users)
    }

    /// Whether a username is already registered (exact match)
    pub fn is_username_taken(&self, username: &str) -> bool {
        self.scan_lenient()
            .iter()
            .any(|u| u.username == username)
    }

    /// Whether an email is already registered (exact match)
    pub fn is_email_taken(&self, email: &str) -> bool {
        self.scan_lenient().iter().any(|u| u.email == email)
    }

    /// Whether a password hash is already registered (exact match).
    ///
    /// The registration flow enforces password uniqueness across users;
    /// hashes are compared, never raw passwords.
    pub fn is_password_taken(&self, password_hash: &str) -> bool {
        self.scan_lenient()
            .iter()
            .any(|u| u.password_hash == password_hash)
    }

    /// Scan that treats read failure as an empty registry.
    ///
    /// Uniqueness checks deliberately stay available when the store cannot
    /// be read; the failure is logged and the value reported as not taken.
    fn scan_lenient(&self) -> Vec<UserProfile> {
        match self.load_all() {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(
                    "Unable to scan registry {:?}: {}. Treating as empty.",
                    self.path,
                    e
                );
                Vec::new()
            }
        }
    }
}

/// Format a profile as a single registry line (no trailing newline)
pub fn format_record(profile: &UserProfile) -> String {
    format!(
        "Username: {}, Password: {}, Email: {}, Age: {}, Fitness Level: {}, Goals: {}, Illnesses: {}, Surgeries: {}",
        profile.username,
        profile.password_hash,
        profile.email,
        profile.age,
        profile.fitness_level,
        profile.fitness_goals.join(", "),
        profile.illnesses,
        profile.surgeries,
    )
}

/// Parse a registry line back into a profile.
///
/// Anchors on the fixed field markers in order, so a goals list containing
/// `", "` does not shift the later fields.
pub fn parse_record(line: &str) -> Result<UserProfile> {
    let rest = line.strip_prefix(FIELD_MARKERS[0]).ok_or_else(|| {
        crate::Error::Registry("record does not start with a username field".into())
    })?;

    // Cut the remainder at each subsequent marker, left to right
    let mut values = Vec::with_capacity(FIELD_MARKERS.len());
    let mut rest = rest;
    for marker in &FIELD_MARKERS[1..] {
        let pos = rest.find(marker).ok_or_else(|| {
            crate::Error::Registry(format!("missing field marker '{}'", marker.trim()))
        })?;
        values.push(&rest[..pos]);
        rest = &rest[pos + marker.len()..];
    }
    values.push(rest);

    let [username, password_hash, email, age, level, goals, illnesses, surgeries]: [&str; 8] =
        values
            .try_into()
            .map_err(|_| crate::Error::Registry("wrong field count".into()))?;

    let age: u8 = age
        .parse()
        .map_err(|_| crate::Error::Registry(format!("invalid age '{}'", age)))?;
    let fitness_level = FitnessLevel::from_str(level)
        .map_err(|_| crate::Error::Registry(format!("invalid fitness level '{}'", level)))?;

    let fitness_goals = if goals.is_empty() {
        Vec::new()
    } else {
        goals.split(", ").map(str::to_string).collect()
    };

    Ok(UserProfile {
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        email: email.to_string(),
        fitness_goals,
        fitness_level,
        age,
        illnesses: illnesses.to_string(),
        surgeries: surgeries.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_password;

    fn create_test_profile(username: &str) -> UserProfile {
        UserProfile {
            username: username.into(),
            password_hash: hash_password(&format!("{}-password", username)),
            email: format!("{}@example.com", username),
            fitness_goals: vec!["Weight Loss".into(), "Stress Relief".into()],
            fitness_level: FitnessLevel::Beginner,
            age: 30,
            illnesses: "None".into(),
            surgeries: "None".into(),
        }
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let profile = create_test_profile("alice");
        let line = format_record(&profile);
        let parsed = parse_record(&line).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_goals_with_embedded_separator_parse_back() {
        // The goals field itself contains ", "; the fixed markers keep the
        // later fields anchored.
        let profile = create_test_profile("alice");
        let line = format_record(&profile);
        let parsed = parse_record(&line).unwrap();
        assert_eq!(
            parsed.fitness_goals,
            vec!["Weight Loss".to_string(), "Stress Relief".to_string()]
        );
        assert_eq!(parsed.illnesses, "None");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_record("not a record").is_err());
        assert!(parse_record("Username: alice").is_err());
        assert!(parse_record("").is_err());
    }

    #[test]
    fn test_append_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let registry = UserRegistry::new(temp_dir.path().join("users.txt"));

        registry.append(&create_test_profile("alice")).unwrap();
        registry.append(&create_test_profile("bob")).unwrap();

        let users = registry.load_all().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].username, "bob");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let registry = UserRegistry::new(temp_dir.path().join("nonexistent.txt"));
        assert!(registry.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("users.txt");
        let registry = UserRegistry::new(&path);

        registry.append(&create_test_profile("alice")).unwrap();
        std::fs::write(
            &path,
            format!(
                "{}\ngarbage line\n",
                format_record(&create_test_profile("alice"))
            ),
        )
        .unwrap();

        let users = registry.load_all().unwrap();
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_username_uniqueness_is_field_exact() {
        let temp_dir = tempfile::tempdir().unwrap();
        let registry = UserRegistry::new(temp_dir.path().join("users.txt"));

        registry.append(&create_test_profile("bob2")).unwrap();

        // "bob" is a prefix of "bob2" but is not registered
        assert!(!registry.is_username_taken("bob"));
        assert!(registry.is_username_taken("bob2"));
    }

    #[test]
    fn test_email_and_password_uniqueness() {
        let temp_dir = tempfile::tempdir().unwrap();
        let registry = UserRegistry::new(temp_dir.path().join("users.txt"));

        let alice = create_test_profile("alice");
        registry.append(&alice).unwrap();

        assert!(registry.is_email_taken("alice@example.com"));
        assert!(!registry.is_email_taken("lice@example.com"));
        assert!(registry.is_password_taken(&alice.password_hash));
        assert!(!registry.is_password_taken(&hash_password("other")));
    }

    #[test]
    fn test_checks_lenient_on_unreadable_store() {
        // A directory at the registry path opens fine but fails on read,
        // exercising the error path rather than the missing-file shortcut.
        let temp_dir = tempfile::tempdir().unwrap();
        let registry = UserRegistry::new(temp_dir.path());

        assert!(registry.load_all().is_err());
        assert!(!registry.is_username_taken("alice"));
        assert!(!registry.is_email_taken("alice@example.com"));
        assert!(!registry.is_password_taken(&hash_password("secret")));
    }

    #[test]
    fn test_checks_lenient_on_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let registry = UserRegistry::new(temp_dir.path().join("nonexistent.txt"));

        assert!(!registry.is_username_taken("alice"));
        assert!(!registry.is_email_taken("alice@example.com"));
    }
}

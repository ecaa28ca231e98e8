use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

/// Scoped env var override; restores the previous value on drop.
struct EnvGuard {
    key: &'static str,
    saved: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let guard = Self::capture(key);
        unsafe { std::env::set_var(key, value) };
        guard
    }

    fn remove(key: &'static str) -> Self {
        let guard = Self::capture(key);
        unsafe { std::env::remove_var(key) };
        guard
    }

    fn capture(key: &'static str) -> Self {
        Self {
            key,
            saved: std::env::var_os(key),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match self.saved.take() {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

#[test]
fn defaults_match_the_classic_setup() {
    let s = Settings::default();
    assert_eq!(s.library.folder, "audio");
    assert_eq!(s.library.extension, "mp3");
    assert!(!s.library.recursive);
    assert!(s.library.follow_links);
    assert_eq!(s.display.now_playing_fields.len(), 2);
    assert!(matches!(s.display.now_playing_fields[0], TrackField::Artist));
    assert!(matches!(s.display.now_playing_fields[1], TrackField::Title));
    assert_eq!(s.display.now_playing_separator, " - ");
    assert_eq!(s.log.filter, "segno=info");
    assert!(s.validate().is_ok());
}

#[test]
fn resolve_config_path_prefers_segno_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SEGNO_CONFIG_PATH", "/tmp/segno-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/segno-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/segno-xdg");
    let _g2 = EnvGuard::set("HOME", "/tmp/segno-home-unused");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/segno-xdg")
            .join("segno")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/segno-home");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/segno-home")
            .join(".config")
            .join("segno")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
folder = "/srv/music"
extension = "ogg"
recursive = true
follow_links = false

[display]
now_playing_fields = ["artist", "title", "album"]
now_playing_separator = " / "

[log]
filter = "segno=debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SEGNO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SEGNO__LIBRARY__EXTENSION");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.folder, "/srv/music");
    assert_eq!(s.library.extension, "ogg");
    assert!(s.library.recursive);
    assert!(!s.library.follow_links);
    assert_eq!(s.display.now_playing_fields.len(), 3);
    assert!(matches!(s.display.now_playing_fields[2], TrackField::Album));
    assert_eq!(s.display.now_playing_separator, " / ");
    assert_eq!(s.log.filter, "segno=debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
extension = "mp3"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SEGNO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SEGNO__LIBRARY__EXTENSION", "flac");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.extension, "flac");
}

#[test]
fn settings_load_rejects_unknown_now_playing_field() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[display]
now_playing_fields = ["bogus"]
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SEGNO_CONFIG_PATH", cfg_path.to_str().unwrap());

    assert!(Settings::load().is_err());
}

#[test]
fn validate_rejects_an_empty_extension() {
    let mut s = Settings::default();
    s.library.extension = " . ".to_string();
    assert!(s.validate().is_err());
}

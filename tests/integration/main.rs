//! Integration tests for toolcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Command isolated to a temp cache root and config file
    fn toolcache(dir: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("toolcache");
        cmd.env("RUNNER_TOOL_CACHE", dir.path().join("cache"))
            .env("TOOLCACHE_CONFIG", dir.path().join("config.toml"))
            .env("TOOLCACHE_ARCH", "x64");
        cmd
    }

    fn payload(dir: &TempDir, version: &str) -> PathBuf {
        let src = dir.path().join("payloads").join(version);
        fs::create_dir_all(src.join("bin")).unwrap();
        fs::write(src.join("bin/tool"), version).unwrap();
        src
    }

    fn seed(dir: &TempDir, tool: &str, versions: &[&str]) {
        for version in versions {
            let src = payload(dir, version);
            toolcache(dir)
                .arg("cache-dir")
                .arg(&src)
                .args([tool, version])
                .assert()
                .success();
        }
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("toolcache")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("local cache of versioned CI tools"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("toolcache")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("toolcache"));
    }

    #[test]
    fn cache_file_then_find() {
        let dir = TempDir::new().unwrap();
        let download = dir.path().join("download-42");
        fs::write(&download, "sample data").unwrap();
        let entry = dir.path().join("cache/foo/1.1.0/x64");

        toolcache(&dir)
            .arg("cache-file")
            .arg(&download)
            .args(["foo", "foo", "1.1.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains(entry.to_string_lossy().as_ref()));

        toolcache(&dir)
            .args(["find", "foo", "1.1.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains(entry.to_string_lossy().as_ref()));

        assert_eq!(fs::read_to_string(entry.join("foo")).unwrap(), "sample data");
        assert!(dir.path().join("cache/foo/1.1.0/x64.complete").is_file());
    }

    #[test]
    fn find_range_resolves_highest() {
        let dir = TempDir::new().unwrap();
        seed(&dir, "x", &["1.0.0", "1.2.0", "1.2.5", "2.0.0"]);

        toolcache(&dir)
            .args(["find", "x", "1.x"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1.2.5"));

        toolcache(&dir)
            .args(["find", "x", ">=1.2.0 <2.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1.2.5"));
    }

    #[test]
    fn find_miss_fails_quietly() {
        let dir = TempDir::new().unwrap();
        seed(&dir, "x", &["1.0.0"]);

        toolcache(&dir)
            .args(["find", "x", "3.0.0"])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("not found"));
    }

    #[test]
    fn find_respects_arch() {
        let dir = TempDir::new().unwrap();
        let src = payload(&dir, "1.0.0");

        toolcache(&dir)
            .args(["--arch", "arm64", "cache-dir"])
            .arg(&src)
            .args(["x", "1.0.0"])
            .assert()
            .success();

        toolcache(&dir).args(["find", "x", "1.0.0"]).assert().failure();

        toolcache(&dir)
            .args(["find", "x", "1.0.0", "--arch", "arm64"])
            .assert()
            .success()
            .stdout(predicate::str::contains("arm64"));
    }

    #[test]
    fn versions_lists_complete_only() {
        let dir = TempDir::new().unwrap();
        seed(&dir, "x", &["2.0.0", "1.0.0"]);
        fs::create_dir_all(dir.path().join("cache/x/3.0.0/x64")).unwrap();

        toolcache(&dir)
            .args(["versions", "x"])
            .assert()
            .success()
            .stdout(predicate::eq("1.0.0\n2.0.0\n"));
    }

    #[test]
    fn missing_source_fails() {
        let dir = TempDir::new().unwrap();

        toolcache(&dir)
            .args(["cache-dir", "/does/not/exist", "x", "1.0.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Source directory not found"));

        assert!(!dir.path().join("cache/x").exists());
    }

    #[test]
    fn undefined_root_fails() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("toolcache")
            .env_remove("RUNNER_TOOL_CACHE")
            .env("TOOLCACHE_CONFIG", dir.path().join("config.toml"))
            .args(["find", "x", "1.0.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cache root is not defined"));
    }

    #[test]
    fn root_from_config_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.toml");
        let root = dir.path().join("from-file");
        fs::write(
            &config,
            format!("[cache]\nroot = {:?}\narch = \"x64\"\n", root.to_string_lossy()),
        )
        .unwrap();
        let src = payload(&dir, "1.0.0");

        cargo_bin_cmd!("toolcache")
            .env_remove("RUNNER_TOOL_CACHE")
            .env_remove("TOOLCACHE_ARCH")
            .env("TOOLCACHE_CONFIG", &config)
            .arg("cache-dir")
            .arg(&src)
            .args(["x", "1.0.0"])
            .assert()
            .success();

        assert!(root.join("x/1.0.0/x64.complete").is_file());
    }

    #[test]
    fn empty_env_root_falls_back_to_config_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.toml");
        let root = dir.path().join("from-file");
        fs::write(
            &config,
            format!("[cache]\nroot = {:?}\n", root.to_string_lossy()),
        )
        .unwrap();
        let src = payload(&dir, "1.0.0");

        toolcache(&dir)
            .env("RUNNER_TOOL_CACHE", "")
            .arg("cache-dir")
            .arg(&src)
            .args(["x", "1.0.0"])
            .assert()
            .success();

        assert!(root.join("x/1.0.0/x64.complete").is_file());
    }

    #[test]
    fn path_like_tool_is_rejected() {
        let dir = TempDir::new().unwrap();
        let src = payload(&dir, "1.0.0");
        let victim = dir.path().join("victim");
        fs::create_dir_all(victim.join("1.0.0/x64")).unwrap();
        fs::write(victim.join("1.0.0/x64/keep"), "keep").unwrap();

        toolcache(&dir)
            .arg("cache-dir")
            .arg(&src)
            .arg(&victim)
            .arg("1.0.0")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument tool"));

        toolcache(&dir)
            .args(["find", "../x", "1.0.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument tool"));

        assert!(victim.join("1.0.0/x64/keep").is_file());
    }

    #[test]
    fn list_and_prune_incomplete() {
        let dir = TempDir::new().unwrap();
        seed(&dir, "x", &["1.0.0"]);
        let stale = dir.path().join("cache/x/2.0.0/x64");
        fs::create_dir_all(&stale).unwrap();

        toolcache(&dir)
            .args(["list", "--all", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"incomplete\""))
            .stdout(predicate::str::contains("\"complete\""));

        toolcache(&dir)
            .args(["prune", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("would be removed"));
        assert!(stale.exists());

        toolcache(&dir).arg("prune").assert().success();
        assert!(!stale.exists());
        assert!(dir.path().join("cache/x/1.0.0/x64").is_dir());
    }

    #[test]
    fn config_path_and_show() {
        let dir = TempDir::new().unwrap();

        toolcache(&dir)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));

        toolcache(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"));
    }

    #[test]
    fn config_init_writes_file() {
        let dir = TempDir::new().unwrap();

        toolcache(&dir).args(["config", "init"]).assert().success();
        assert!(dir.path().join("config.toml").is_file());

        toolcache(&dir)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));
    }
}

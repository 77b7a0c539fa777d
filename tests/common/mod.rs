pub mod template_server;

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

/// Build a gzip tarball whose single top-level folder is `root_dir`.
pub fn template_tarball(root_dir: &str) -> Vec<u8> {
    let work = tempdir().unwrap();
    let src = work.path().join(root_dir);
    fs::create_dir_all(src.join("apps").join("web")).unwrap();
    fs::write(
        src.join("package.json"),
        "{\n  \"name\": \"platform-starter-kit\",\n  \"private\": true\n}\n",
    )
    .unwrap();
    fs::write(src.join("README.md"), "# Platform Starter Kit\n").unwrap();
    fs::write(
        src.join("apps").join("web").join("index.ts"),
        "export const ok = true;\n",
    )
    .unwrap();
    let archive = work.path().join("kit.tar.gz");
    pack(work.path(), root_dir, &archive);
    fs::read(&archive).unwrap()
}

fn pack(parent: &Path, root_dir: &str, archive: &Path) {
    let status = Command::new("tar")
        .arg("-czf")
        .arg(archive)
        .arg("-C")
        .arg(parent)
        .arg(root_dir)
        .status()
        .expect("tar should be installed");
    assert!(status.success(), "tar -czf failed");
}

/// Run git in `dir` and return trimmed stdout.
pub fn git_output(dir: &Path, args: &[&str]) -> String {
    let out = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git should be installed");
    assert!(out.status.success(), "git {args:?} failed");
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn install_writes_configs_and_start_stop_script() {
    let ctx = TestContext::new();
    ctx.write_default_buildout();

    ctx.cli()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Installed part 'web'"));

    let main = ctx.read("parts/web/etc/supervisor/supervisord.conf");
    assert!(main.contains("[inet_http_server]\nport = 127.0.0.1:9001\n"));
    assert!(main.contains("[include]\nfiles = conf.d/*.conf\n"));

    let program = ctx.read("parts/web/etc/supervisor/conf.d/web.conf");
    assert!(program.starts_with("[program:web]\ncommand=/bin/echo hi\n"));
    assert!(program.contains("autostart=true\n"));
    assert!(!program.contains("user="));

    let script = ctx.read("parts/web/etc/init.d/supervisord");
    assert!(script.starts_with("#!/bin/sh\n"));
}

#[cfg(unix)]
#[test]
fn start_stop_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    ctx.write_default_buildout();
    ctx.cli().arg("install").assert().success();

    let script = ctx.part_prefix("web").join("etc/init.d/supervisord");
    let mode = std::fs::metadata(&script).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn install_provisions_runtime_directories() {
    let ctx = TestContext::new();
    ctx.write_default_buildout();
    ctx.cli().arg("i").assert().success();

    let prefix = ctx.part_prefix("web");
    for dir in ["var/run", "var/log/supervisor", "var/tmp", "etc/supervisor/conf.d", "bin", "lib"] {
        assert!(prefix.join(dir).is_dir(), "{} should exist", dir);
    }
}

#[test]
fn install_links_entry_points_into_bin_directory() {
    let ctx = TestContext::new();
    ctx.write_default_buildout();
    ctx.cli().arg("install").assert().success();

    let link = ctx.bin_dir().join("supervisord");
    assert!(link.symlink_metadata().is_ok(), "supervisord entry point should exist");

    let control = ctx.read("bin/supervisorctl");
    assert!(control.contains("supervisorctl\" -c \""));
    assert!(control.contains("etc/supervisor/supervisord.conf"));
}

#[cfg(unix)]
#[test]
fn shared_bin_directory_entry_points_drive_one_daemon() {
    let ctx = TestContext::new();
    ctx.write_buildout(&format!(
        r#"[buildout]
parts-directory = "{}"
bin-directory = "{}"

[parts.a]
command = "/bin/echo a"

[parts.b]
command = "/bin/echo b"
"#,
        ctx.parts_dir().display(),
        ctx.bin_dir().display()
    ));

    ctx.cli().arg("install").assert().success();

    let link = std::fs::read_link(ctx.bin_dir().join("supervisord")).unwrap();
    assert_eq!(link, ctx.part_prefix("a").join("etc/init.d/supervisord"));

    let control = ctx.read("bin/supervisorctl");
    let config_a = ctx.part_prefix("a").join("etc/supervisor/supervisord.conf");
    assert!(control.contains(&config_a.display().to_string()));
    assert!(!control.contains("parts/b/"));
}

#[test]
fn globals_flow_into_main_config() {
    let ctx = TestContext::new();
    ctx.write_buildout(&format!(
        r#"[buildout]
parts-directory = "{}"
supervisor-port = 9100
supervisor-username = "admin"
supervisor-password = "secret"

[parts.web]
command = "/bin/echo hi"
program = "api"
"#,
        ctx.parts_dir().display()
    ));

    ctx.cli().arg("install").assert().success();

    let main = ctx.read("parts/web/etc/supervisor/supervisord.conf");
    assert!(main.contains("port = 127.0.0.1:9100\nusername = admin\npassword = secret\n"));
    let program = ctx.read("parts/web/etc/supervisor/conf.d/api.conf");
    assert!(program.starts_with("[program:api]\n"));
}

#[test]
fn monitor_can_be_disabled() {
    let ctx = TestContext::new();
    ctx.write_buildout(&format!(
        "[buildout]\nparts-directory = \"{}\"\nsupervisor-use-monitor = false\n\n[parts.web]\ncommand = \"run\"\n",
        ctx.parts_dir().display()
    ));

    ctx.cli().arg("install").assert().success();

    let main = ctx.read("parts/web/etc/supervisor/supervisord.conf");
    assert!(!main.contains("[inet_http_server]"));
}

#[test]
fn custom_config_path_is_honored() {
    let ctx = TestContext::new();
    let parts = ctx.parts_dir();
    std::fs::write(
        ctx.work_dir().join("other.toml"),
        format!("[buildout]\nparts-directory = \"{}\"\n\n[parts.worker]\ncommand = \"run\"\n", parts.display()),
    )
    .unwrap();

    ctx.cli().args(["-c", "other.toml", "install"]).assert().success();

    assert!(ctx.part_prefix("worker").join("etc/supervisor/conf.d/worker.conf").is_file());
}

#[test]
fn uninstall_keeps_generated_files() {
    let ctx = TestContext::new();
    ctx.write_default_buildout();
    ctx.cli().arg("install").assert().success();

    ctx.cli()
        .args(["uninstall", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generated files kept"));

    assert!(ctx.part_prefix("web").join("etc/supervisor/supervisord.conf").is_file());
}

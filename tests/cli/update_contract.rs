use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn update_rewrites_artifacts() {
    let ctx = TestContext::new();
    ctx.write_default_buildout();
    ctx.cli().arg("install").assert().success();

    let program = ctx.part_prefix("web").join("etc/supervisor/conf.d/web.conf");
    std::fs::write(&program, "stale").unwrap();

    ctx.cli()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Updated part 'web'"));

    assert!(ctx.read("parts/web/etc/supervisor/conf.d/web.conf").starts_with("[program:web]\n"));
}

#[test]
fn update_picks_up_changed_options() {
    let ctx = TestContext::new();
    ctx.write_default_buildout();
    ctx.cli().arg("install").assert().success();

    ctx.write_buildout(&format!(
        "[buildout]\nparts-directory = \"{}\"\n\n[parts.web]\ncommand = \"/bin/echo bye\"\npriority = 10\n",
        ctx.parts_dir().display()
    ));
    ctx.cli().arg("u").assert().success();

    let program = ctx.read("parts/web/etc/supervisor/conf.d/web.conf");
    assert!(program.contains("command=/bin/echo bye\n"));
    assert!(program.contains("priority=10\n"));
}

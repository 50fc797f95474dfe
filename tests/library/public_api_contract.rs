use crate::harness::TestContext;
use supervisor_recipe::{
    AppError, TemplateId, install_at, render_at, resolve_options_at, uninstall_at, update_at,
};

#[test]
fn public_api_lifecycle_happy_path_contract() {
    let ctx = TestContext::new();
    let config = ctx.write_default_buildout();

    let receipts = install_at(&config, &[]).expect("install failed");
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].part, "web");
    let program = ctx.part_prefix("web").join("etc/supervisor/conf.d/web.conf");
    assert!(receipts[0].paths.contains(&program));
    assert!(receipts[0].paths.contains(&ctx.bin_dir().join("supervisord")));

    let updated = update_at(&config, &["web".to_string()]).expect("update failed");
    assert!(updated[0].paths.contains(&program));
    assert!(!updated[0].paths.contains(&ctx.part_prefix("web").join("var/run")));

    uninstall_at(&config, "web").expect("uninstall failed");
    assert!(program.is_file());
}

#[test]
fn public_api_inspection_contract() {
    let ctx = TestContext::new();
    let config = ctx.write_default_buildout();

    let options = resolve_options_at(&config, "web").expect("resolve failed");
    assert_eq!(options.program(), "web");
    assert_eq!(options.get("command"), Some("/bin/echo hi"));

    let script = render_at(&config, "web", TemplateId::ControlScript).expect("render failed");
    assert!(script.starts_with("#!/bin/sh\n"));
    assert!(!ctx.parts_dir().exists());
}

#[test]
fn every_template_renders_for_a_minimal_part() {
    let ctx = TestContext::new();
    let config = ctx.write_default_buildout();

    for template in TemplateId::ALL {
        let text = render_at(&config, "web", template)
            .unwrap_or_else(|e| panic!("{} failed: {}", template, e));
        assert!(!text.is_empty());
    }
}

#[test]
fn public_api_errors_are_typed() {
    let ctx = TestContext::new();
    let config = ctx.work_dir().join("missing.toml");

    let err = install_at(&config, &[]).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

//! Integration tests for config module public API.

use siteviews::config::{load_merged_settings, load_settings, validate, Settings};
use siteviews::sites::{SiteRef, SiteLookup};
use siteviews::Mapper;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(root: &Path, file: &str, content: &str) {
    let dir = root.join(".siteviews");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

#[test]
fn public_api_is_accessible() {
    let settings = Settings::default();
    assert!(validate(&settings).is_ok());
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        "config.yml",
        r#"
views_root: views
overrides_dir: tenants
admin_site: admin
sites:
  "1": acme
  admin: headquarters
templates:
  - name: promo_banner
    path: promos/banner
    partial: true
"#,
    );
    let promo = temp.path().join("views/tenants/acme/promos/_banner.html.erb");
    fs::create_dir_all(promo.parent().unwrap()).unwrap();
    fs::write(&promo, "").unwrap();

    let settings = load_merged_settings(temp.path()).unwrap();
    validate(&settings).unwrap();

    let mapper = Mapper::from_settings(&settings, temp.path()).unwrap();
    assert!(matches!(mapper.find_site("admin"), SiteLookup::Found(_)));

    let resolved = mapper
        .resolve(&SiteRef::from("1"), "promo_banner")
        .unwrap()
        .unwrap();
    assert_eq!(resolved.path(), "tenants/acme/promos/banner");
    assert!(resolved.is_partial());
}

#[test]
fn local_config_adds_sites() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "config.yml", "sites:\n  \"1\": acme\n");
    write_config(temp.path(), "config.local.yml", "sites:\n  dev: sandbox\n");

    let settings = load_settings(temp.path(), None).unwrap();
    assert_eq!(settings.sites.len(), 2);
    assert_eq!(settings.sites["dev"], "sandbox");
}

#[test]
fn invalid_config_fails_validation() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "config.yml", "sites:\n  \"1\": ../escape\n");

    let settings = load_merged_settings(temp.path()).unwrap();
    assert!(validate(&settings).is_err());
}

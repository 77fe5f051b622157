use leadgrid::core::logo::{LogoServices, LogoTier, website_domain};

#[test]
fn domain_is_taken_from_the_website() {
    assert_eq!(website_domain("https://acme.com"), Some("acme.com".into()));
    assert_eq!(website_domain("http://acme.com/about/team"), Some("acme.com".into()));
    assert_eq!(website_domain("  acme.com/x "), Some("acme.com".into()));
    assert_eq!(website_domain("HTTPS://Acme.com"), Some("Acme.com".into()));
    assert_eq!(website_domain(""), None);
    assert_eq!(website_domain("https://"), None);
}

#[test]
fn logo_url_uses_the_logo_service() {
    let logos = LogoServices::default();
    assert_eq!(
        logos.logo_url("https://acme.com/about"),
        Some("https://logo.clearbit.com/acme.com".into())
    );
    assert_eq!(logos.logo_url(""), None);
}

#[test]
fn fallback_chain_without_logo_or_website_is_just_the_avatar() {
    let logos = LogoServices::default();
    let chain = logos.fallback_chain("", None, "");

    assert_eq!(chain.len(), 1);
    assert_eq!(chain[0].0, LogoTier::Avatar);
    assert_eq!(
        chain[0].1,
        "https://ui-avatars.com/api/?name=Company&background=random&color=fff&size=128"
    );
}

#[test]
fn fallback_chain_orders_tiers() {
    let logos = LogoServices::default();

    let chain = logos.fallback_chain("Acme & Co", None, "https://acme.com");
    let tiers: Vec<LogoTier> = chain.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        tiers,
        vec![LogoTier::LogoService, LogoTier::Favicon, LogoTier::Avatar]
    );
    assert_eq!(
        chain[1].1,
        "https://www.google.com/s2/favicons?domain=acme.com&sz=128"
    );
    assert!(chain[2].1.contains("name=Acme%20%26%20Co"));

    let chain = logos.fallback_chain("Acme", Some("https://cdn.example/acme.png"), "");
    assert_eq!(chain[0], (LogoTier::Explicit, "https://cdn.example/acme.png".to_string()));
    assert_eq!(chain.len(), 2);
}

#[test]
fn custom_services_are_honoured() {
    let logos = LogoServices {
        logo_service_url: "https://img.local/logo/".into(),
        ..LogoServices::default()
    };
    assert_eq!(
        logos.logo_url("acme.com"),
        Some("https://img.local/logo/acme.com".into())
    );
}

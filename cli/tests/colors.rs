use albumgraph::colors::ColorScheme;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Just verify methods don't panic and keep the text
    let title = colors.album_title("Test Album");
    assert!(title.to_string().contains("Test Album"));

    let artist = colors.artist("Test Artist");
    assert!(artist.to_string().contains("Test Artist"));

    let success = colors.success("Success");
    assert!(success.to_string().contains("Success"));

    let error = colors.error("Error");
    assert!(error.to_string().contains("Error"));

    let step = colors.step_number("1.");
    assert!(step.to_string().contains("1."));

    let num = colors.number("123");
    assert!(num.to_string().contains("123"));

    let stats = colors.stats("Stats");
    assert!(stats.to_string().contains("Stats"));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    // With colors disabled, output should be plain text
    assert_eq!(colors.album_title("Test Album").to_string(), "Test Album");
    assert_eq!(colors.success("Success").to_string(), "Success");
    assert_eq!(colors.error("Error").to_string(), "Error");

    assert_eq!(colors.balance(8).to_string(), "+8");
    assert_eq!(colors.balance(-8).to_string(), "-8");
    assert_eq!(colors.balance(0).to_string(), "+0");
}

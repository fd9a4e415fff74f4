use super::*;

#[test]
fn test_cli_defaults_to_all_pages_and_first_tab() {
    let cli = Cli::try_parse_from([
        "saber-dash", "render", "--data", "data", "--out", "out",
    ])
    .unwrap();
    let Command::Render { page, area, .. } = cli.command;
    assert_eq!(page, PageArg::All);
    assert_eq!(area, AreaArg::LecturaCritica);
}

#[test]
fn test_cli_parses_page_and_area() {
    let cli = Cli::try_parse_from([
        "saber-dash",
        "render",
        "--data",
        "data",
        "--out",
        "out",
        "--page",
        "areas",
        "--area",
        "matematicas",
    ])
    .unwrap();
    let Command::Render { page, area, .. } = cli.command;
    assert_eq!(page, PageArg::Areas);
    assert_eq!(area, AreaArg::Matematicas);
}

#[test]
fn test_cli_rejects_unknown_page() {
    assert!(
        Cli::try_parse_from([
            "saber-dash", "render", "--data", "data", "--out", "out", "--page", "resumen",
        ])
        .is_err()
    );
}

#[test]
fn test_selected_pages_all_covers_every_kind() {
    assert_eq!(selected_pages(PageArg::All), ALL_PAGES.to_vec());
    assert_eq!(selected_pages(PageArg::Highlights), vec![PageKind::Highlights]);
}

#[test]
fn test_area_selection_all_means_cycle() {
    assert_eq!(area_selection(AreaArg::Ingles), Some(Area::Ingles));
    assert_eq!(area_selection(AreaArg::All), None);
}

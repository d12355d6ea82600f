#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_positive, parse_vertex_id};
    use crate::cli::{Cli, Command, OutputFormat};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;
    use waypoint_graph::VertexId;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_vertex_id_valid() {
        assert_eq!(parse_vertex_id("1"), Ok(VertexId::new(1)));
        assert_eq!(parse_vertex_id(" 42 "), Ok(VertexId::new(42)));
    }

    #[test]
    fn test_parse_vertex_id_invalid() {
        assert_eq!(parse_vertex_id("0"), Err("Vertex ids start at 1".to_string()));
        assert!(parse_vertex_id("-3").is_err());
        assert!(parse_vertex_id("a").is_err());
        assert!(parse_vertex_id("").is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("100"), Ok(100));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("many").is_err());
    }

    #[test]
    fn test_show_command() {
        let cli = Cli::try_parse_from(["waypoint", "show", "graphs.txt"]).unwrap();
        match cli.command {
            Command::Show(args) => assert_eq!(args.file, PathBuf::from("graphs.txt")),
            other => panic!("expected show, got {other:?}"),
        }
        assert_eq!(cli.global.format, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_path_command_defaults_to_first_graph() {
        let cli = Cli::try_parse_from(["waypoint", "path", "graphs.txt", "1", "3"]).unwrap();
        match cli.command {
            Command::Path(args) => {
                assert_eq!(args.source, VertexId::new(1));
                assert_eq!(args.dest, VertexId::new(3));
                assert_eq!(args.graph, 1);
            }
            other => panic!("expected path, got {other:?}"),
        }
    }

    #[test]
    fn test_path_command_with_graph_index() {
        let cli =
            Cli::try_parse_from(["waypoint", "path", "graphs.txt", "2", "1", "--graph", "3"])
                .unwrap();
        assert!(matches!(cli.command, Command::Path(args) if args.graph == 3));
    }

    #[test]
    fn test_path_command_rejects_zero_vertex() {
        assert!(Cli::try_parse_from(["waypoint", "path", "graphs.txt", "0", "1"]).is_err());
        assert!(
            Cli::try_parse_from(["waypoint", "path", "graphs.txt", "1", "2", "--graph", "0"])
                .is_err()
        );
    }

    #[test]
    fn test_check_command_strict() {
        let cli = Cli::try_parse_from(["waypoint", "check", "--strict", "graphs.txt"]).unwrap();
        assert!(matches!(cli.command, Command::Check(args) if args.strict));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "waypoint",
            "show",
            "graphs.txt",
            "--format",
            "json",
            "--max-vertices",
            "5",
            "--config",
            "custom.json",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.global.format, Some(OutputFormat::Json));
        assert_eq!(cli.global.max_vertices, Some(5));
        assert_eq!(cli.global.config, Some(PathBuf::from("custom.json")));
        assert!(cli.no_color);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["waypoint", "-v", "-q", "show", "g.txt"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Cli::try_parse_from(["waypoint", "show", "g.txt", "--format", "xml"]).is_err());
    }
}

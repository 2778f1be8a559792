//! Integration tests for Tabtex end-to-end conversion

use std::fs;
use std::path::PathBuf;

use tabtex::{
    csv_to_latex_table, discover_inputs, output_path, parse_csv_file, parse_csv_str,
    render_document, RenderOptions,
};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tabtex-it-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ============================================================================
// String-level conversion
// ============================================================================

mod convert {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scores_example() {
        let csv = "name,score\nA&B,95.12352\nC_D,3\n";
        let options = RenderOptions {
            caption: Some("Results".to_string()),
            label: Some("tab:res".to_string()),
            ..Default::default()
        };

        let parsed = parse_csv_str(csv).unwrap();
        let tex = render_document(&parsed.table, "scores.csv", &options).unwrap();

        let expected = "\\begin{table}[t]\n\
                        \\centering\n\
                        \\begin{tabular}{lr}\n\
                        \\toprule\n\
                        name & score \\\\\n\
                        \\midrule\n\
                        A\\&B & 95.1235 \\\\\n\
                        C\\_D & 3 \\\\\n\
                        \\bottomrule\n\
                        \\end{tabular}\n\
                        \\caption{Results}\n\
                        \\label{tab:res}\n\
                        \\end{table}\n";
        assert_eq!(tex, expected);
    }

    #[test]
    fn test_default_caption_mentions_source() {
        let parsed = parse_csv_str("a\n1\n").unwrap();
        let tex = render_document(&parsed.table, "sales.csv", &RenderOptions::default()).unwrap();

        assert!(tex.contains("\\caption{Auto-generated table from sales.csv}"));
        assert!(tex.contains("\\label{tab:sales}"));
    }

    #[test]
    fn test_one_shot_helper() {
        let tex = csv_to_latex_table("city,pop\nOslo,634293\n").unwrap();
        assert!(tex.contains("\\begin{tabular}{lr}"));
        assert!(tex.contains("Oslo & 634293 \\\\"));
    }

    #[test]
    fn test_text_columns_not_rounded() {
        // "id" mixes numeric-looking and text values, so it must stay text
        // and keep its digits untouched.
        let parsed = parse_csv_str("id,v\n007x,1.55557\n12,2\n").unwrap();
        assert_eq!(parsed.warnings.len(), 1);

        let tex = render_document(&parsed.table, "t.csv", &RenderOptions::default()).unwrap();
        assert!(tex.contains("007x & 1.5556 \\\\"));
        assert!(tex.contains("12 & 2 \\\\"));
    }

    #[test]
    fn test_header_only_table() {
        let parsed = parse_csv_str("a,b,c\n").unwrap();
        let tex = render_document(&parsed.table, "empty.csv", &RenderOptions::default()).unwrap();

        assert!(tex.contains("\\begin{tabular}{lrr}"));
        assert!(tex.contains("a & b & c \\\\"));
        assert!(tex.contains("\\midrule\n\\bottomrule"));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let parsed = parse_csv_str("").unwrap();
        let err = render_document(&parsed.table, "nil.csv", &RenderOptions::default()).unwrap_err();
        assert!(err.to_string().contains("no columns"));
    }
}

// ============================================================================
// File discovery and batch conversion
// ============================================================================

mod batch {
    use super::*;

    #[test]
    fn test_discover_respects_pattern_and_sorts() {
        let dir = scratch_dir("discover");
        for name in ["dlr_b.csv", "dlr_a.csv", "other.csv", "notes.txt"] {
            fs::write(dir.join(name), "x\n1\n").unwrap();
        }

        let files = discover_inputs(&dir, "dlr_*.csv").unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["dlr_a.csv", "dlr_b.csv"]);

        let all = discover_inputs(&dir, "*.csv").unwrap();
        assert_eq!(all.len(), 3);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = scratch_dir("empty");
        assert!(discover_inputs(&dir, "*.csv").unwrap().is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_discover_single_file() {
        let dir = scratch_dir("single");
        let file = dir.join("only.csv");
        fs::write(&file, "x\n1\n").unwrap();

        let files = discover_inputs(&file, "*.csv").unwrap();
        assert_eq!(files, vec![file]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_to_file_conversion() {
        let dir = scratch_dir("convert");
        let out_dir = dir.join("latex_tables");
        fs::create_dir_all(&out_dir).unwrap();

        let input = dir.join("sales.csv");
        fs::write(&input, "region,total\nnorth&east,1024.55557\nsouth,98\n").unwrap();

        let parsed = parse_csv_file(&input).unwrap();
        let tex = render_document(&parsed.table, "sales.csv", &RenderOptions::default()).unwrap();
        let out = output_path(&out_dir, &input);
        fs::write(&out, &tex).unwrap();

        assert_eq!(out, out_dir.join("sales.tex"));
        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("north\\&east & 1024.5556 \\\\"));
        assert!(written.contains("\\label{tab:sales}"));
        assert!(written.ends_with("\\end{table}\n"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ragged_file_is_parse_error() {
        let dir = scratch_dir("ragged");
        let input = dir.join("bad.csv");
        fs::write(&input, "a,b\n1,2\n3\n").unwrap();

        let err = parse_csv_file(&input).unwrap_err();
        assert!(err.to_string().contains("Parse error"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_csv_file(&PathBuf::from("/nonexistent/tabtex/in.csv")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}

#[cfg(all(unix, feature = "native-export"))]
mod unix {
    use crate::common::{aistudio, exported_at};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;
    use transcript_babel::formats::pdf::{ChromeRenderer, PdfFormat, PdfSettings};
    use transcript_babel::{export, extract, MarkupProfile, SerializedDocument, Transcript};

    /// Fake Chrome that copies its HTML input next to the PDF it writes
    fn write_stub_chrome() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let script_path = dir.path().join("fake-chrome.sh");
        let script = r#"#!/bin/sh
OUTPUT=""
INPUT=""
for arg in "$@"; do
  case $arg in
    --print-to-pdf=*)
      OUTPUT="${arg#*=}"
      ;;
    file://*)
      INPUT="${arg#file://}"
      ;;
  esac
done
if [ -z "$OUTPUT" ]; then
  echo "missing output" >&2
  exit 1
fi
printf '%%PDF-1.7\n%%%%EOF\n' > "$OUTPUT"
cp "$INPUT" "$(dirname "$0")/last-page.html"
exit 0
"#;
        fs::write(&script_path, script).unwrap();
        let mut perms = fs::metadata(&script_path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).unwrap();
        (dir, script_path)
    }

    fn transcript() -> Transcript {
        Transcript::new(
            extract(&aistudio(), &MarkupProfile::default()),
            exported_at(),
        )
    }

    #[test]
    fn pdf_artifact_uses_chrome_stub() {
        let (dir, chrome_stub) = write_stub_chrome();
        let format = PdfFormat::new(
            PdfSettings::default(),
            Box::new(ChromeRenderer::with_binary(&chrome_stub)),
        );

        let artifact = export(&transcript(), &format).unwrap();

        assert_eq!(
            artifact.file_name,
            format!("AI_Studio_{}.pdf", exported_at().timestamp_millis())
        );
        assert_eq!(artifact.content_type, "application/pdf");
        match artifact.document {
            SerializedDocument::Binary(bytes) => assert!(bytes.starts_with(b"%PDF")),
            _ => panic!("Expected binary PDF output"),
        }

        let page = fs::read_to_string(dir.path().join("last-page.html")).unwrap();
        assert!(page.contains("@page { size: A4 portrait; margin: 10mm; }"));
        assert!(page.contains("<div class=\"turn turn-user\">"));
        assert!(page.contains("<p>Hello</p>"));
        assert!(!page.contains("Thinking about"));
    }

    #[test]
    fn renderer_binary_from_environment() {
        let (_dir, chrome_stub) = write_stub_chrome();
        let prev = std::env::var("TRANSCRIPT_CHROME_BIN").ok();
        std::env::set_var("TRANSCRIPT_CHROME_BIN", &chrome_stub);

        let result = export(&transcript(), &PdfFormat::default());

        if let Some(prev) = prev {
            std::env::set_var("TRANSCRIPT_CHROME_BIN", prev);
        } else {
            std::env::remove_var("TRANSCRIPT_CHROME_BIN");
        }

        let artifact = result.unwrap();
        assert!(artifact.document.into_bytes().starts_with(b"%PDF"));
    }
}

#[cfg(not(all(unix, feature = "native-export")))]
#[test]
fn pdf_stub_skipped() {
    eprintln!("Skipping PDF tests (native-export feature or Unix required)");
}

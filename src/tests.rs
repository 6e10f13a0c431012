#[cfg(test)]
mod conversion_tests {
    use crate::core::convert_text;
    use crate::document::Texture;
    use crate::transcode::TranscodeOptions;
    use serde_json::{json, Value};

    const HEADER: &str = r#"{
        "header": {
            "target": "w",
            "formatVersion": 5,
            "hidef": true,
            "compressed": true
        },
        "readers": [
            {
                "type": "Microsoft.Xna.Framework.Content.SpriteFontReader, Microsoft.Xna.Framework.Graphics, Version=4.0.0.0, Culture=neutral, PublicKeyToken=842cf8be1de50553",
                "version": 0
            },
            {
                "type": "Microsoft.Xna.Framework.Content.Texture2DReader, Microsoft.Xna.Framework.Graphics, Version=4.0.0.0, Culture=neutral, PublicKeyToken=842cf8be1de50553",
                "version": 0
            }
        ]
    }"#;

    const SINGLE_GLYPH: &str = r#"{"LineSpacing":26,"Spacing":0,"DefaultCharacter":"~","Glyphs":{"A":{"BoundsInTexture":"{X:24 Y:0 Width:12 Height:20}","Cropping":"{X:0 Y:0 Width:12 Height:26}","LeftSideBearing":0.0,"Width":12.0,"RightSideBearing":0.0}}}"#;

    fn convert(header: &str, font: &str) -> Value {
        let conversion = convert_text(
            header,
            font,
            &TranscodeOptions::default(),
            Texture::for_output(0, "output"),
        )
        .unwrap();
        serde_json::from_str(&conversion.json).unwrap()
    }

    #[test]
    fn single_glyph_end_to_end() {
        let output = convert(r#"{"header":{},"readers":[]}"#, SINGLE_GLYPH);
        let content = &output["content"];

        assert_eq!(content["texture"], json!({"format": 0, "export": "output.png"}));
        assert_eq!(
            content["glyphs"],
            json!([{"x": 24, "y": 0, "width": 12, "height": 20}])
        );
        assert_eq!(
            content["cropping"],
            json!([{"x": 0, "y": 0, "width": 12, "height": 26}])
        );
        assert_eq!(content["characterMap"], json!(["A"]));
        assert_eq!(content["verticalLineSpacing"], 26);
        assert_eq!(content["horizontalSpacing"], 0);
        assert_eq!(content["kerning"], json!([{"x": 0.0, "y": 0.0, "z": 12.0}]));
        assert_eq!(content["defaultCharacter"], "~");
    }

    #[test]
    fn header_sections_pass_through_unchanged() {
        let output = convert(HEADER, SINGLE_GLYPH);
        let input: Value = serde_json::from_str(HEADER).unwrap();

        assert_eq!(output["header"], input["header"]);
        assert_eq!(output["readers"], input["readers"]);

        let pretty = |value: &Value| serde_json::to_string(value).unwrap();
        assert_eq!(pretty(&output["header"]), pretty(&input["header"]));
        assert_eq!(pretty(&output["readers"]), pretty(&input["readers"]));
    }

    #[test]
    fn texture_is_the_first_content_key() {
        let output = convert(HEADER, SINGLE_GLYPH);
        let first = output["content"].as_object().unwrap().keys().next().cloned();
        assert_eq!(first.as_deref(), Some("texture"));
    }

    #[test]
    fn implicit_order_is_by_code_point() {
        let glyph = r#"{"BoundsInTexture":"{X:0 Y:0 Width:1 Height:1}","Cropping":"{X:0 Y:0 Width:1 Height:1}","LeftSideBearing":0,"Width":1,"RightSideBearing":0}"#;
        let font = format!(
            r#"{{"LineSpacing":1,"Spacing":0,"DefaultCharacter":"A","Glyphs":{{"B":{glyph},"1":{glyph},"A":{glyph}}}}}"#
        );
        let output = convert(HEADER, &font);
        let content = &output["content"];

        assert_eq!(content["characterMap"], json!(["1", "A", "B"]));
        let len = content["characterMap"].as_array().unwrap().len();
        for key in ["glyphs", "cropping", "kerning"] {
            assert_eq!(content[key].as_array().unwrap().len(), len, "{key}");
        }
    }

    #[test]
    fn repeated_conversion_is_byte_identical() {
        let options = TranscodeOptions::default();
        let first = convert_text(HEADER, SINGLE_GLYPH, &options, Texture::for_output(0, "f")).unwrap();
        let second = convert_text(HEADER, SINGLE_GLYPH, &options, Texture::for_output(0, "f")).unwrap();
        assert_eq!(first.json.as_bytes(), second.json.as_bytes());
    }

    #[test]
    fn numbers_are_written_exactly_as_read() {
        let header = r#"{"header":{"big":18446744073709551616,"exp":1e3,"dec":1.50},"readers":[]}"#;
        let font = SINGLE_GLYPH
            .replace(
                "\"LeftSideBearing\":0.0",
                "\"LeftSideBearing\":0.123456789012345678901",
            )
            .replace("\"RightSideBearing\":0.0", "\"RightSideBearing\":1e1");
        let conversion = convert_text(
            header,
            &font,
            &TranscodeOptions::default(),
            Texture::for_output(0, "output"),
        )
        .unwrap();

        let json = &conversion.json;
        assert!(json.contains("\"big\": 18446744073709551616"));
        assert!(json.contains("\"exp\": 1e3"));
        assert!(json.contains("\"dec\": 1.50"));
        assert!(json.contains("\"x\": 0.123456789012345678901"));
        assert!(json.contains("\"y\": 1e1"));
        assert!(json.contains("\"z\": 12.0"));
    }

    #[test]
    fn non_ascii_characters_are_written_as_utf8() {
        let font = SINGLE_GLYPH.replace("\"A\":", "\"é\":").replace("\"~\"", "\"ü\"");
        let conversion = convert_text(
            HEADER,
            &font,
            &TranscodeOptions::default(),
            Texture::for_output(0, "output"),
        )
        .unwrap();
        assert!(conversion.json.contains("\"é\""));
        assert!(conversion.json.contains("\"defaultCharacter\": \"ü\""));
    }
}

#[cfg(test)]
mod legacy_layout_tests {
    use crate::core::{convert_text, ConvertError};
    use crate::document::Texture;
    use crate::transcode::{CharacterOrder, MissingGlyphs, TranscodeOptions};
    use serde_json::{json, Value};

    const HEADER: &str = r#"{"header":{},"readers":[]}"#;
    const LISTED: &str = r#"{
        "LineSpacing": 18,
        "Spacing": 0,
        "DefaultCharacter": "?",
        "Characters": ["?", "x", "!"],
        "Glyphs": {
            "!": {"BoundsInTexture": "{X:0 Y:0 Width:3 Height:18}", "Cropping": "{X:0 Y:0 Width:3 Height:18}",
                  "LeftSideBearing": 1.0, "Width": 3.0, "RightSideBearing": 1.0},
            "?": {"BoundsInTexture": "{X:3 Y:0 Width:7 Height:18}", "Cropping": "{X:0 Y:0 Width:7 Height:18}",
                  "LeftSideBearing": 0.0, "Width": 7.0, "RightSideBearing": 1.0}
        }
    }"#;

    fn listed(missing: MissingGlyphs) -> TranscodeOptions {
        TranscodeOptions {
            order: CharacterOrder::Listed,
            missing,
        }
    }

    #[test]
    fn lenient_mode_keeps_unmatched_character_in_map() {
        let conversion = convert_text(
            HEADER,
            LISTED,
            &listed(MissingGlyphs::Skip),
            Texture::for_output(0, "output"),
        )
        .unwrap();
        assert_eq!(conversion.skipped, vec!['x']);
        assert_eq!(conversion.glyph_count, 2);
        assert_eq!(conversion.character_count, 3);

        let output: Value = serde_json::from_str(&conversion.json).unwrap();
        assert_eq!(output["content"]["characterMap"], json!(["?", "x", "!"]));
        assert_eq!(
            output["content"]["glyphs"][1],
            json!({"x": 0, "y": 0, "width": 3, "height": 18})
        );
    }

    #[test]
    fn strict_mode_fails_before_any_output() {
        let result = convert_text(
            HEADER,
            LISTED,
            &listed(MissingGlyphs::Error),
            Texture::for_output(0, "output"),
        );
        assert!(matches!(
            result,
            Err(ConvertError::MissingGlyph { character: 'x' })
        ));
    }

    #[test]
    fn sorted_mode_ignores_the_list() {
        let conversion = convert_text(
            HEADER,
            LISTED,
            &TranscodeOptions::default(),
            Texture::for_output(0, "output"),
        )
        .unwrap();
        let output: Value = serde_json::from_str(&conversion.json).unwrap();
        assert_eq!(output["content"]["characterMap"], json!(["!", "?"]));
        assert!(conversion.skipped.is_empty());
    }
}

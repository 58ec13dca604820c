use crate::{
    core::{
        models::Ruby,
        utils::utf16_len,
    },
    segmentation::response::FuriganaPart,
};

/// Walk a furigana annotation left to right, starting the offset cursor at
/// the token's position. Plain parts advance the cursor without producing a
/// span; annotated parts emit one ruby covering their base text. A missing
/// annotation yields an empty list.
pub fn ruby_spans(furigana: Option<&[FuriganaPart]>, position: u32) -> Vec<Ruby> {
    let Some(parts) = furigana else {
        return Vec::new();
    };

    let mut offset = position;
    let mut rubies = Vec::new();

    for part in parts {
        match part {
            FuriganaPart::Plain(text) => {
                offset += utf16_len(text);
            }
            FuriganaPart::Annotated(base, reading) => {
                let length = utf16_len(base);
                rubies.push(Ruby {
                    text: Some(reading.clone()),
                    start: offset,
                    end: offset + length,
                    length,
                });
                offset += length;
            }
        }
    }

    rubies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> FuriganaPart {
        FuriganaPart::Plain(text.to_string())
    }

    fn annotated(base: &str, reading: &str) -> FuriganaPart {
        FuriganaPart::Annotated(base.to_string(), reading.to_string())
    }

    #[test]
    fn missing_annotation_yields_empty_list() {
        assert_eq!(ruby_spans(None, 7), Vec::new());
    }

    #[test]
    fn plain_parts_advance_the_cursor() {
        // ["食べ", ["る", "る"]] on a token starting at 10
        let parts = [plain("食べ"), annotated("る", "る")];
        let rubies = ruby_spans(Some(&parts), 10);

        assert_eq!(
            rubies,
            vec![Ruby { text: Some("る".to_string()), start: 12, end: 13, length: 1 }]
        );
    }

    #[test]
    fn spans_are_strictly_increasing() {
        let parts = [annotated("勉", "べん"), annotated("強", "きょう"), plain("する")];
        let rubies = ruby_spans(Some(&parts), 0);

        assert_eq!(rubies.len(), 2);
        assert_eq!(rubies[0], Ruby { text: Some("べん".to_string()), start: 0, end: 1, length: 1 });
        assert_eq!(
            rubies[1],
            Ruby { text: Some("きょう".to_string()), start: 1, end: 2, length: 1 }
        );
        assert!(rubies[0].end <= rubies[1].start);
    }

    #[test]
    fn bases_outside_the_bmp_use_utf16_lengths() {
        // 𠮟る: the kanji is a surrogate pair, two code units
        let parts = [annotated("𠮟", "しか"), plain("る")];
        let rubies = ruby_spans(Some(&parts), 0);

        assert_eq!(
            rubies,
            vec![Ruby { text: Some("しか".to_string()), start: 0, end: 2, length: 2 }]
        );
    }

    #[test]
    fn walk_is_idempotent_over_the_same_annotation() {
        let parts = [plain("食"), annotated("べ", "べ"), plain("る")];
        let first = ruby_spans(Some(&parts), 4);
        let second = ruby_spans(Some(&parts), 4);
        assert_eq!(first, second);
    }
}

use crate::models::ClassificationResult;

pub const CLASSIFICATION_MARKER: &str = "分類:";
pub const REASON_MARKER: &str = "理由:";

/// Parses the line-oriented reply grammar.
///
/// The first line containing `分類:` supplies `lv1_code, lv1_name, lv2_code,
/// lv2_name` as a comma-separated list after the marker; the first line
/// containing `理由:` supplies the reason. A line carrying the classification
/// marker is never read as a reason line. Anything else is ignored.
///
/// Exactly four non-empty segments are required for a classification; any other
/// shape leaves the four fields empty while still returning the reason.
pub fn parse_classification_reply(reply: &str) -> ClassificationResult {
    let mut classification: Option<&str> = None;
    let mut reason: Option<&str> = None;

    for line in reply.lines() {
        if let Some(rest) = after_marker(line, CLASSIFICATION_MARKER) {
            classification.get_or_insert(rest);
        } else if let Some(rest) = after_marker(line, REASON_MARKER) {
            reason.get_or_insert(rest);
        }
    }

    let reason = reason.unwrap_or_default();

    match classification.and_then(split_classification) {
        Some([lv1_code, lv1_name, lv2_code, lv2_name]) => {
            ClassificationResult::matched(lv1_code, lv1_name, lv2_code, lv2_name, reason)
        }
        None => ClassificationResult::unclassified(reason),
    }
}

fn after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker)
        .map(|idx| line[idx + marker.len()..].trim())
}

fn split_classification(text: &str) -> Option<[&str; 4]> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c, d] if parts.iter().all(|p| !p.is_empty()) => Some([*a, *b, *c, *d]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_reply() {
        let result = parse_classification_reply("分類: A1,Name1,B2,Name2\n理由: because");
        assert_eq!(result.fields(), ["A1", "Name1", "B2", "Name2", "because"]);
    }

    #[test]
    fn test_wrong_arity_keeps_reason() {
        let result = parse_classification_reply("分類: A1,Name1\n理由: x");
        assert_eq!(result.fields(), ["", "", "", "", "x"]);

        let result = parse_classification_reply("分類: A,B,C,D,E\n理由: five");
        assert_eq!(result.fields(), ["", "", "", "", "five"]);
    }

    #[test]
    fn test_empty_segment_is_rejected() {
        let result = parse_classification_reply("分類: 100, ,110,Airfare\n理由: gap");
        assert_eq!(result.fields(), ["", "", "", "", "gap"]);
    }

    #[test]
    fn test_segments_are_trimmed_and_order_does_not_matter() {
        let reply = "はい、分類しました。\n理由: 航空券のため\n  分類:  100 , 旅費交通費 ,110,  航空券  \n";
        let result = parse_classification_reply(reply);
        assert_eq!(
            result.fields(),
            ["100", "旅費交通費", "110", "航空券", "航空券のため"]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let reply = "分類: 1,a,2,b\n分類: 3,c,4,d\n理由: first\n理由: second";
        let result = parse_classification_reply(reply);
        assert_eq!(result.fields(), ["1", "a", "2", "b", "first"]);
    }

    #[test]
    fn test_reason_keeps_embedded_colons() {
        let result = parse_classification_reply("分類: 1,a,2,b\n理由: 参考: 勘定科目表 10:00");
        assert_eq!(result.reason, "参考: 勘定科目表 10:00");
    }

    #[test]
    fn test_no_markers() {
        let result = parse_classification_reply("I cannot classify this item.");
        assert!(result.is_blank());
    }

    #[test]
    fn test_full_width_colon_is_not_a_marker() {
        let result = parse_classification_reply("分類：1,a,2,b\n理由：x");
        assert!(result.is_blank());
    }
}

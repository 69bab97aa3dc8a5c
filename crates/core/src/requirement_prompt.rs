//! Prompt rendering for requirements-document generation.
//!
//! The template is fixed: the idea title and body are embedded verbatim
//! (no escaping), followed by the seven sections every generated document
//! must contain and the output language/tone instruction.

/// System instruction shared by every provider ("you are an expert systems analyst").
pub const SYSTEM_INSTRUCTION: &str = "あなたは優秀なシステムアナリストです。";

/// A top-level section of the generated document, with optional sub-items.
#[derive(Debug, Clone, Copy)]
pub struct DocumentSection {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

/// Sections the document must contain, in order.
///
/// Overview; purpose and background; functional requirements (mandatory /
/// optional); non-functional requirements (performance / security /
/// availability); system architecture; rough schedule; risks and mitigations.
pub const REQUIRED_SECTIONS: [DocumentSection; 7] = [
    DocumentSection {
        label: "概要",
        items: &[],
    },
    DocumentSection {
        label: "目的と背景",
        items: &[],
    },
    DocumentSection {
        label: "機能要件",
        items: &["必須機能", "オプション機能"],
    },
    DocumentSection {
        label: "非機能要件",
        items: &["パフォーマンス", "セキュリティ", "可用性"],
    },
    DocumentSection {
        label: "システム構成",
        items: &[],
    },
    DocumentSection {
        label: "開発スケジュール（概算）",
        items: &[],
    },
    DocumentSection {
        label: "リスクと対策",
        items: &[],
    },
];

const INTRO: &str = "以下のアイデアから、詳細な要件定義書を作成してください。";
const SECTIONS_HEADER: &str = "要件定義書には以下の項目を含めてください：";
const LANGUAGE_INSTRUCTION: &str = "日本語で、専門的かつ分かりやすく記述してください。";

/// Render the generation prompt for an idea.
///
/// Pure and deterministic: identical input always yields byte-identical output.
pub fn build_prompt(title: &str, body: &str) -> String {
    let mut prompt = String::with_capacity(512 + title.len() + body.len());

    prompt.push('\n');
    prompt.push_str(INTRO);
    prompt.push_str("\n\n");
    prompt.push_str(&format!("タイトル: {title}\n"));
    prompt.push_str(&format!("内容: {body}\n\n"));
    prompt.push_str(SECTIONS_HEADER);
    prompt.push('\n');

    for (index, section) in REQUIRED_SECTIONS.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", index + 1, section.label));
        for item in section.items {
            prompt.push_str(&format!("   - {item}\n"));
        }
    }

    prompt.push('\n');
    prompt.push_str(LANGUAGE_INSTRUCTION);
    prompt.push('\n');
    prompt
}

//! Prompt templates for each generation kind

use crate::domain::ports::PromptKind;

/// System instruction shared by every prompt
pub const SYSTEM_PROMPT: &str =
    "당신은 한국어 기술 블로그의 편집자입니다. 요청한 형식 그대로만 답하세요.";

/// Build the user prompt for `kind` around the article text
pub fn build_prompt(kind: PromptKind, text: &str) -> String {
    let instruction = match kind {
        PromptKind::Tags => {
            "다음 글에 어울리는 태그를 5~10개 추천하세요. \
             태그만 쉼표로 구분해 한 줄로 답하고, # 기호나 설명은 붙이지 마세요."
        }
        PromptKind::Metadata => {
            "다음 글의 SEO 메타데이터를 작성하세요. \
             메타 제목은 60자 이내, 메타 설명은 50~160자로 작성하고 \
             {\"metaTitle\": \"...\", \"metaDescription\": \"...\"} 형식의 JSON 객체만 답하세요."
        }
        PromptKind::Summary => {
            "다음 글을 LinkedIn 게시물처럼 3~5문장으로 요약하세요. \
             핵심 내용과 독자가 얻을 점을 담고, 요약문만 답하세요."
        }
    };

    format!("{}\n\n---\n{}", instruction, text)
}

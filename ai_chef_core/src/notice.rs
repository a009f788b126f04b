use std::collections::VecDeque;
use std::fmt;

/// Something the user needs to be told about. Queued instead of raised so the page stays
/// interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MissingConfig,
    QuotaExhausted,
    /// Non-success status with a structured error body.
    HttpFailure { status: u16, body: String },
    /// Non-success status whose body was not an error object.
    UnparseableFailure { status: u16, body: String },
    /// Success status, but the function reported an error.
    FunctionError(String),
    Unexpected,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MissingConfig => write!(f, "Supabase 환경 변수가 설정되지 않았습니다."),
            Notice::QuotaExhausted => {
                write!(f, "오류: OpenAI 할당량이 부족합니다. 관리자에게 문의하세요.")
            }
            Notice::HttpFailure { status, body } => write!(f, "오류: {status} {body}"),
            Notice::UnparseableFailure { status, body } => write!(f, "Error: {status} - {body}"),
            Notice::FunctionError(message) => write!(f, "Error: {message}"),
            Notice::Unexpected => write!(f, "An unexpected error occurred."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    entries: VecDeque<(NoticeId, Notice)>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.entries.push_back((id, notice));
        id
    }

    pub fn dismiss(&mut self, id: NoticeId) -> Option<Notice> {
        let idx = self.entries.iter().position(|(entry, _)| *entry == id)?;
        self.entries.remove(idx).map(|(_, notice)| notice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(NoticeId, Notice)> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back().map(|(_, notice)| notice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_notice() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(Notice::Unexpected);
        let second = queue.push(Notice::QuotaExhausted);
        assert_eq!(queue.dismiss(first), Some(Notice::Unexpected));
        assert_eq!(queue.dismiss(first), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|(id, _)| *id), Some(second));
    }

    #[test]
    fn messages_carry_status_and_body() {
        let notice = Notice::HttpFailure {
            status: 400,
            body: r#"{"error":"other_failure"}"#.into(),
        };
        let text = notice.to_string();
        assert!(text.contains("400"));
        assert!(text.contains(r#"{"error":"other_failure"}"#));
        assert_eq!(
            Notice::FunctionError("bad_title".into()).to_string(),
            "Error: bad_title"
        );
    }
}

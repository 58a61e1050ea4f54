//! ユーザー向け通知（アラート）

/// 自動で閉じるまでの時間
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// 例: "alert alert-danger alert-dismissible"
    pub fn css_class(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.kind.as_str())
    }
}

/// 通知キュー（新しいものが先頭）
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.insert(0, Notice { id, kind, message: message.into() });
        id
    }

    /// 閉じる（既に閉じていればfalse）
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// 古い順に取り出して空にする
    pub fn drain(&mut self) -> Vec<Notice> {
        let mut drained: Vec<Notice> = self.items.drain(..).collect();
        drained.reverse();
        drained
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

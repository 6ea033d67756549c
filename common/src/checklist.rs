//! チェックリストストア
//!
//! 探索対象アイテム名の順序付き集合。挿入時に一意性を保証する
//! (大文字小文字を区別した完全一致)。追加元は検出コールバックと
//! 手動入力の2つのみで、永続化はしない。

/// チェックリストストア
///
/// アイテムは最初に追加された順序を保持する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistStore {
    items: Vec<String>,
}

impl ChecklistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期アイテム付きで生成(重複は最初の出現のみ残す)
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for item in items {
            store.add_if_absent(&item.into());
        }
        store
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// 未登録の場合のみ末尾に追加する
    ///
    /// 追加した場合 true、既に存在した場合 false を返す。
    /// 同一ラベルの再検出に対して冪等。
    pub fn add_if_absent(&mut self, item: &str) -> bool {
        if item.is_empty() || self.contains(item) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    /// リスト全体を置き換える(順序を保ったまま重複除去)
    pub fn replace<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.clear();
        for item in items {
            let item = item.into();
            self.add_if_absent(&item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_if_absent_appends() {
        let mut store = ChecklistStore::new();
        assert!(store.add_if_absent("cup"));
        assert_eq!(store.items(), &["cup".to_string()]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_if_absent_idempotent() {
        // 同一ラベルの二重追加で長さ・内容が変わらないこと
        let mut store = ChecklistStore::new();
        assert!(store.add_if_absent("cup"));
        assert!(!store.add_if_absent("cup"));
        assert_eq!(store.items(), &["cup".to_string()]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_if_absent_case_sensitive() {
        // 大文字小文字は区別する
        let mut store = ChecklistStore::new();
        store.add_if_absent("cup");
        assert!(store.add_if_absent("Cup"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_if_absent_rejects_empty() {
        let mut store = ChecklistStore::new();
        assert!(!store.add_if_absent(""));
        assert!(store.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        // 最初に追加された順序を保持
        let mut store = ChecklistStore::new();
        store.add_if_absent("bottle");
        store.add_if_absent("cup");
        store.add_if_absent("cell phone");
        store.add_if_absent("cup"); // 再検出
        assert_eq!(
            store.items(),
            &[
                "bottle".to_string(),
                "cup".to_string(),
                "cell phone".to_string()
            ]
        );
    }

    #[test]
    fn test_with_items_dedups() {
        let store = ChecklistStore::with_items(["cup", "bottle", "cup"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0], "cup");
        assert_eq!(store.items()[1], "bottle");
    }

    #[test]
    fn test_replace() {
        let mut store = ChecklistStore::with_items(["cup"]);
        store.replace(["book", "chair", "book"]);
        assert_eq!(store.items(), &["book".to_string(), "chair".to_string()]);
    }

    #[test]
    fn test_contains() {
        let store = ChecklistStore::with_items(["cup"]);
        assert!(store.contains("cup"));
        assert!(!store.contains("bottle"));
    }
}

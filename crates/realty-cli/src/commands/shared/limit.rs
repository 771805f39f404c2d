/// Keep the first `limit` items.
pub fn take<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::take;

    #[test]
    fn shorter_lists_are_untouched() {
        assert_eq!(take(vec![1, 2], 5), vec![1, 2]);
    }

    #[test]
    fn longer_lists_are_cut() {
        assert_eq!(take(vec![1, 2, 3, 4], 2), vec![1, 2]);
    }
}

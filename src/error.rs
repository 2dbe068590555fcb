use failure_derive::Fail;

/// Reasons a list operation can reject its arguments.
///
/// Every rejected call leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
pub enum ListError {
  #[fail(display = "index {} out of range for list of size {}", index, size)]
  IndexOutOfRange { index: usize, size: usize },

  #[fail(display = "block is not in this list")]
  BlockNotFound,

  #[fail(display = "node is not in this list")]
  NodeNotFound,
}

pub type ListResult<T> = Result<T, ListError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_messages() {
    let err = ListError::IndexOutOfRange { index: 4, size: 3 };
    assert_eq!(err.to_string(), "index 4 out of range for list of size 3");
    assert_eq!(ListError::BlockNotFound.to_string(), "block is not in this list");
    assert_eq!(ListError::NodeNotFound.to_string(), "node is not in this list");
  }

  #[test]
  fn test_not_found_is_distinct_from_out_of_range() {
    let results: Vec<ListResult<()>> = vec![
      Err(ListError::BlockNotFound),
      Err(ListError::IndexOutOfRange { index: 0, size: 0 }),
    ];

    let kinds: Vec<bool> = results
      .iter()
      .map(|r| matches!(r, Err(ListError::BlockNotFound)))
      .collect();

    assert_eq!(kinds, vec![true, false]);
  }
}

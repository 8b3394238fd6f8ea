//! Path builders for records tabletmgr keeps in the coordination store.

use tabletmgr_core::error::AppError;
use tabletmgr_core::result::AppResult;

/// Root under which every cell keeps its records.
const ROOT: &str = "/zk";

/// Path of the tablet record for `uid` in `cell`.
pub fn tablet_path(cell: &str, uid: u32) -> String {
    format!("{ROOT}/{cell}/vt/tablets/{uid:010}")
}

/// Turn a user-supplied tablet reference into a tablet record path.
///
/// Accepts either an absolute record path or a `cell-uid` alias.
pub fn resolve_tablet_ref(reference: &str) -> AppResult<String> {
    if reference.starts_with('/') {
        return Ok(reference.trim_end_matches('/').to_string());
    }

    let (cell, uid) = reference
        .rsplit_once('-')
        .ok_or_else(|| AppError::validation(format!("Invalid tablet alias: '{reference}'")))?;
    if cell.is_empty() {
        return Err(AppError::validation(format!(
            "Invalid tablet alias: '{reference}'"
        )));
    }
    let uid: u32 = uid
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid tablet uid in '{reference}'")))?;
    Ok(tablet_path(cell, uid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletmgr_core::error::ErrorKind;

    #[test]
    fn test_tablet_path() {
        assert_eq!(tablet_path("nyc", 62344), "/zk/nyc/vt/tablets/0000062344");
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(
            resolve_tablet_ref("nyc-0000062344").unwrap(),
            "/zk/nyc/vt/tablets/0000062344"
        );
    }

    #[test]
    fn test_resolve_path_passthrough() {
        assert_eq!(
            resolve_tablet_ref("/zk/nyc/vt/tablets/0000000001/").unwrap(),
            "/zk/nyc/vt/tablets/0000000001"
        );
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        let err = resolve_tablet_ref("nyc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = resolve_tablet_ref("nyc-abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}

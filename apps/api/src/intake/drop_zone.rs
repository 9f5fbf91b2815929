use serde::Serialize;

use crate::errors::AppError;
use crate::intake::file_type::accept_upload;
use crate::intake::upload::ResumeUpload;

/// Drag-and-drop target. `drag_over` drives the highlighted state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DropZone {
    drag_over: bool,
}

impl DropZone {
    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn drag_over(&mut self) {
        self.drag_over = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    /// Clears the highlight and validates the dropped file. Dropping nothing is
    /// `Ok(None)`; an invalid file is an error and is not adopted.
    pub fn drop(&mut self, upload: Option<ResumeUpload>) -> Result<Option<ResumeUpload>, AppError> {
        self.drag_over = false;
        match upload {
            None => Ok(None),
            Some(upload) => accept_upload(Some(upload)).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_drag_over_then_leave() {
        let mut zone = DropZone::default();
        assert!(!zone.is_drag_over());
        zone.drag_over();
        assert!(zone.is_drag_over());
        zone.drag_leave();
        assert!(!zone.is_drag_over());
    }

    #[test]
    fn test_drop_clears_highlight_and_accepts_valid_file() {
        let mut zone = DropZone::default();
        zone.drag_over();
        let dropped = zone
            .drop(Some(ResumeUpload::new("cv.txt", Bytes::from_static(b"rust"))))
            .unwrap();
        assert!(!zone.is_drag_over());
        assert_eq!(dropped.unwrap().file_name(), "cv.txt");
    }

    #[test]
    fn test_drop_nothing_is_silent() {
        let mut zone = DropZone::default();
        zone.drag_over();
        assert!(zone.drop(None).unwrap().is_none());
        assert!(!zone.is_drag_over());
    }

    #[test]
    fn test_drop_invalid_file_is_rejected() {
        let mut zone = DropZone::default();
        zone.drag_over();
        let result = zone.drop(Some(ResumeUpload::new("cv.png", Bytes::new())));
        assert!(matches!(result, Err(AppError::InvalidFileType(_))));
        assert!(!zone.is_drag_over());
    }
}

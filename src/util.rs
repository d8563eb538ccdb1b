use crate::ZipperError;

/// Reports a refused move and hands the error back for returning.
#[cold]
pub(crate) fn refuse(error: ZipperError) -> ZipperError {
    tracing::trace!(error = %error, "zipper refused to move");
    error
}

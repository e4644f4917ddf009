mod comment;

pub use comment::{CommentData, CommentRecord, NewComment, SubmitComment, SubmitResponse};

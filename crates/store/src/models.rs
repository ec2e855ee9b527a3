use crate::error::{Error, ErrorKind};
use exn::{OptionExt, ResultExt};
use shelf_models::{BookStatus, BookTitle};

#[derive(sqlx::FromRow)]
pub(crate) struct BookRow {
    pub(crate) name: String,
    pub(crate) status: Option<String>,
}
impl From<(&BookTitle, BookStatus)> for BookRow {
    fn from((title, status): (&BookTitle, BookStatus)) -> Self {
        Self {
            name: title.to_string(),
            status: Some(status.as_str().to_string()),
        }
    }
}
impl TryFrom<BookRow> for (BookTitle, BookStatus) {
    type Error = Error;
    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let title = BookTitle::from_normalized(row.name).or_raise(|| ErrorKind::InvalidData("name"))?;
        let status = row
            .status
            .ok_or_raise(|| ErrorKind::InvalidData("status"))?
            .parse::<BookStatus>()
            .or_raise(|| ErrorKind::InvalidData("status"))?;
        Ok((title, status))
    }
}

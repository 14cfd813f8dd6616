//! 依拍攝日期整理照片元件
//!
//! 掃描資料夾中的照片，依 EXIF 拍攝時間（或檔案建立時間）複製到
//! `{輸出}/{年}/{月}/`，並以日期與內容雜湊重新命名

mod date_resolver;
mod main;
mod organizer;
mod path_builder;
mod transfer;

pub use date_resolver::{
    CaptureDate, CreationTimeProvider, DATE_FORMAT, DateResolver, FsCreationTime,
};
pub use main::PhotoOrganizer;
pub use organizer::{FileMetadata, OrganizeResult, Organizer};
pub use path_builder::build_destination;
pub use transfer::{
    AttributePreservingCopier, NativeCopier, RsyncCopier, TransferExecutor, TransferOutcome,
};

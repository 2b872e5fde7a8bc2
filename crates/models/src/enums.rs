//! Wire enums of the shared `microsoft.graph` namespace.

use graphbeta_serialization::{SerializationError, WireEnum};

/// Device platforms a search answer can target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DevicePlatformType {
    #[default]
    Unknown,
    Android,
    AndroidForWork,
    Ios,
    MacOs,
    WindowsPhone81,
    WindowsPhone81AndLater,
    Windows10AndLater,
    AndroidWorkProfile,
    AndroidAsop,
}

impl WireEnum for DevicePlatformType {
    const FAMILY: &'static str = "devicePlatformType";
    const VALUES: &'static [Self] = &[
        Self::Unknown,
        Self::Android,
        Self::AndroidForWork,
        Self::Ios,
        Self::MacOs,
        Self::WindowsPhone81,
        Self::WindowsPhone81AndLater,
        Self::Windows10AndLater,
        Self::AndroidWorkProfile,
        Self::AndroidAsop,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Android => "android",
            Self::AndroidForWork => "androidForWork",
            Self::Ios => "ios",
            Self::MacOs => "macOS",
            Self::WindowsPhone81 => "windowsPhone81",
            Self::WindowsPhone81AndLater => "windowsPhone81AndLater",
            Self::Windows10AndLater => "windows10AndLater",
            Self::AndroidWorkProfile => "androidWorkProfile",
            Self::AndroidAsop => "androidASOP",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "unknown" => Self::Unknown,
            "android" => Self::Android,
            "androidForWork" => Self::AndroidForWork,
            "ios" => Self::Ios,
            "macOS" => Self::MacOs,
            "windowsPhone81" => Self::WindowsPhone81,
            "windowsPhone81AndLater" => Self::WindowsPhone81AndLater,
            "windows10AndLater" => Self::Windows10AndLater,
            "androidWorkProfile" => Self::AndroidWorkProfile,
            "androidASOP" => Self::AndroidAsop,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Layout of a site page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageLayoutType {
    #[default]
    MicrosoftReserved,
    Article,
    Home,
    UnknownFutureValue,
}

impl WireEnum for PageLayoutType {
    const FAMILY: &'static str = "pageLayoutType";
    const VALUES: &'static [Self] = &[
        Self::MicrosoftReserved,
        Self::Article,
        Self::Home,
        Self::UnknownFutureValue,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::MicrosoftReserved => "microsoftReserved",
            Self::Article => "article",
            Self::Home => "home",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "microsoftReserved" => Self::MicrosoftReserved,
            "article" => Self::Article,
            "home" => Self::Home,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Promotion state of a site page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PagePromotionType {
    #[default]
    MicrosoftReserved,
    Page,
    NewsPost,
    UnknownFutureValue,
}

impl WireEnum for PagePromotionType {
    const FAMILY: &'static str = "pagePromotionType";
    const VALUES: &'static [Self] = &[
        Self::MicrosoftReserved,
        Self::Page,
        Self::NewsPost,
        Self::UnknownFutureValue,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::MicrosoftReserved => "microsoftReserved",
            Self::Page => "page",
            Self::NewsPost => "newsPost",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "microsoftReserved" => Self::MicrosoftReserved,
            "page" => Self::Page,
            "newsPost" => Self::NewsPost,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Layout of the title area on a site page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleAreaLayoutType {
    #[default]
    ImageAndTitle,
    Plain,
    ColorBlock,
    Overlap,
    UnknownFutureValue,
}

impl WireEnum for TitleAreaLayoutType {
    const FAMILY: &'static str = "titleAreaLayoutType";
    const VALUES: &'static [Self] = &[
        Self::ImageAndTitle,
        Self::Plain,
        Self::ColorBlock,
        Self::Overlap,
        Self::UnknownFutureValue,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::ImageAndTitle => "imageAndTitle",
            Self::Plain => "plain",
            Self::ColorBlock => "colorBlock",
            Self::Overlap => "overlap",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "imageAndTitle" => Self::ImageAndTitle,
            "plain" => Self::Plain,
            "colorBlock" => Self::ColorBlock,
            "overlap" => Self::Overlap,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Text alignment inside a title area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleAreaTextAlignmentType {
    #[default]
    Left,
    Center,
    UnknownFutureValue,
}

impl WireEnum for TitleAreaTextAlignmentType {
    const FAMILY: &'static str = "titleAreaTextAlignmentType";
    const VALUES: &'static [Self] =
        &[Self::Left, Self::Center, Self::UnknownFutureValue];

    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "left" => Self::Left,
            "center" => Self::Center,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

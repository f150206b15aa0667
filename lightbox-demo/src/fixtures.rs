//! Demo galleries rendered as thumbnail links

#[derive(Clone, Debug, PartialEq)]
pub struct DemoPhoto {
    pub full_url: String,
    pub thumb_url: String,
    pub caption: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoGallery {
    pub key: String,
    pub title: String,
    pub photos: Vec<DemoPhoto>,
}

fn photo(id: u32, caption: Option<&str>) -> DemoPhoto {
    DemoPhoto {
        full_url: format!("https://picsum.photos/id/{id}/1600/1067"),
        thumb_url: format!("https://picsum.photos/id/{id}/320/213"),
        caption: caption.map(str::to_string),
    }
}

pub fn galleries() -> Vec<DemoGallery> {
    vec![
        DemoGallery {
            key: "vacation".to_string(),
            title: "Vacation".to_string(),
            photos: vec![
                photo(1011, Some("Beach")),
                photo(1015, None),
                photo(1016, Some("Mountain")),
            ],
        },
        DemoGallery {
            key: "city".to_string(),
            title: "City".to_string(),
            photos: vec![
                photo(1031, Some("Skyline at dusk")),
                photo(1048, Some("Old town")),
                photo(1067, None),
                photo(1076, Some("Bridge")),
            ],
        },
    ]
}

/// Gallery rendered only after the user asks for it
pub fn late_gallery() -> DemoGallery {
    DemoGallery {
        key: "archive".to_string(),
        title: "Archive".to_string(),
        photos: vec![photo(1080, Some("Strawberries")), photo(1084, Some("Walrus"))],
    }
}

use kite_types::tls::DataSource;

/// Pick the data source flavour once and apply it to every piece of material.
pub fn data_source_generator(inline: bool) -> fn(&str) -> DataSource {
    if inline {
        inline_data_source
    } else {
        file_data_source
    }
}

pub fn inline_data_source(data: &str) -> DataSource {
    DataSource::InlineContent(data.to_string())
}

pub fn file_data_source(path: &str) -> DataSource {
    DataSource::FileReference(path.to_string())
}

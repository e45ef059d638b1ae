use base64::{engine::general_purpose::STANDARD, Engine as _};

const DATA_URL_PREFIX: &str = "data:image";
const DEFAULT_MIME: &str = "image/jpeg";

/// Turns a stored photo (data URL or bare base64) into something an `<img src>` accepts.
pub fn photo_src(photo: &str) -> Option<String> {
    let trimmed = photo.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with(DATA_URL_PREFIX) {
        Some(trimmed.to_string())
    } else {
        Some(format!("data:{};base64,{}", DEFAULT_MIME, trimmed))
    }
}

/// Normalises a captured photo to the canonical upload form: a base64 data URL.
pub fn normalize_upload(photo: &str) -> Result<Option<String>, String> {
    let Some(src) = photo_src(photo) else {
        return Ok(None);
    };
    let payload = src
        .split_once(";base64,")
        .map(|(_, data)| data)
        .ok_or_else(|| "A foto não está codificada em base64.".to_string())?;
    STANDARD
        .decode(payload)
        .map_err(|_| "A foto capturada está corrompida.".to_string())?;
    Ok(Some(src))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_src_keeps_data_urls_and_prefixes_bare_base64() {
        assert_eq!(
            photo_src("data:image/png;base64,AAAA").as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(
            photo_src("AAAA").as_deref(),
            Some("data:image/jpeg;base64,AAAA")
        );
        assert!(photo_src("  ").is_none());
    }

    #[test]
    fn normalize_upload_rejects_invalid_base64() {
        assert_eq!(normalize_upload("").unwrap(), None);
        assert_eq!(
            normalize_upload("aGVsbG8=").unwrap().as_deref(),
            Some("data:image/jpeg;base64,aGVsbG8=")
        );
        assert!(normalize_upload("data:image/jpeg;base64,@@not-base64@@").is_err());
        assert!(normalize_upload("data:image/jpeg,raw").is_err());
    }
}

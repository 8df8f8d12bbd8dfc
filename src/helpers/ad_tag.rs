use url::Url;

/// Build the ad-tag URL for a sponsored placement: the partner's stored
/// URL template with the resolved category appended as `categoryName`
/// and `categoryId` query parameters, in that order.
pub fn build(template: &str, category_name: &str, category_id: i32) -> Result<String, String> {
    let mut url = Url::parse(template)
        .map_err(|err| format!("Invalid ad tag URL {:?}: {}", template, err))?;
    url.query_pairs_mut()
        .append_pair("categoryName", category_name)
        .append_pair("categoryId", &category_id.to_string());
    Ok(url.into())
}

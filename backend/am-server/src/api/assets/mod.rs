pub mod asset_list_response;
pub mod asset_response;
pub mod assets;
pub mod my_assets_query;
pub mod upload_image;

mod error;
mod my_assets_query;
mod upload_image;

use utoipa::OpenApi;
use utoipa::ToSchema;

use service::dto::{
    AddressOut, GalleryImageOut, MasterOut, PageContext, PriceItemOut, PriceList, ReviewOut,
    ServiceOut, SocialOut, SubsectionOut,
};

/// Form body of `POST /reviews/create`. The rating arrives as a string
/// because it comes from an HTML form; non-numeric values coerce to 0 and
/// fail validation.
#[derive(ToSchema)]
pub struct ReviewFormDoc {
    pub name: String,
    pub email: Option<String>,
    pub review: String,
    pub rating: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::pages::health,
        crate::routes::pages::landing_context,
        crate::routes::reviews::create_review,
        crate::routes::admin::reviews::list,
        crate::routes::admin::reviews::set_visibility,
        crate::routes::admin::catalog::list_services,
        crate::routes::admin::catalog::price_list,
        crate::routes::admin::catalog::create_price_item,
    ),
    components(
        schemas(
            ReviewFormDoc,
            PageContext,
            MasterOut,
            SocialOut,
            GalleryImageOut,
            ReviewOut,
            ServiceOut,
            SubsectionOut,
            PriceItemOut,
            PriceList,
            AddressOut,
            crate::routes::admin::reviews::SetVisibilityInput,
            crate::routes::admin::catalog::CreatePriceItemInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "pages"),
        (name = "reviews"),
        (name = "admin")
    )
)]
pub struct ApiDoc;

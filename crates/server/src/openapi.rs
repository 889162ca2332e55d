use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::houses::index,
        crate::houses::show,
        crate::houses::register,
        crate::houses::create,
        crate::houses::edit,
        crate::houses::update,
        crate::houses::delete,
    ),
    tags(
        (name = "health"),
        (name = "houses", description = "House listing administration")
    )
)]
pub struct ApiDoc;

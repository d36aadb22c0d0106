pub mod application {
    pub mod product {
        pub mod add;
        pub mod destroy;
        pub mod edit;
        pub mod list;
        pub mod resolve;
        pub mod store;
        pub mod update;
        pub mod view;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod customer {
        pub mod model;
    }
    pub mod page {
        pub mod model;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod use_cases {
            pub mod add;
            pub mod destroy;
            pub mod edit;
            pub mod list;
            pub mod resolve;
            pub mod store;
            pub mod update;
            pub mod view;
        }
    }
    pub mod routing {
        pub mod errors;
        pub mod model;
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod model;
    }
    pub mod view {
        pub mod model;
    }
}

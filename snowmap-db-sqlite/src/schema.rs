table! {
    locations (id) {
        id -> BigInt,
        lat -> Double,
        lng -> Double,
        title -> Text,
        description -> Text,
        size -> Text,
        badges -> Text,
        categories -> Text,
        popularity -> Text,
        clicks -> BigInt,
        visible -> Bool,
        created_at -> BigInt,
    }
}

table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        password -> Text,
        created_at -> BigInt,
    }
}

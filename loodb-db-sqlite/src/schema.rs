table! {
    toilets (id) {
        id -> Text,
        latitude -> Text,
        longitude -> Text,
        is_free -> Bool,
        is_public -> Bool,
        is_handicap -> Bool,
        is_commerce -> Bool,
        is_verified -> Bool,
        created_at -> BigInt,
        updated_at -> Nullable<BigInt>,
        deleted_at -> Nullable<BigInt>,
    }
}

table! {
    reviews (id) {
        id -> Text,
        toilet_id -> Text,
        user_id -> Text,
        rating -> SmallInt,
        comment -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> Nullable<BigInt>,
        deleted_at -> Nullable<BigInt>,
    }
}

table! {
    pictures (id) {
        id -> Text,
        toilet_id -> Nullable<Text>,
        name -> Nullable<Text>,
        url -> Text,
        created_at -> BigInt,
        updated_at -> Nullable<BigInt>,
        deleted_at -> Nullable<BigInt>,
    }
}

table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        password -> Text,
        image -> Nullable<Text>,
        role -> SmallInt,
        created_at -> BigInt,
        updated_at -> Nullable<BigInt>,
        deleted_at -> Nullable<BigInt>,
    }
}

joinable!(reviews -> toilets (toilet_id));
joinable!(reviews -> users (user_id));
joinable!(pictures -> toilets (toilet_id));

allow_tables_to_appear_in_same_query!(toilets, reviews, pictures, users);

// Diesel schema for the job tracker tables.
// Column names are camelCase in Postgres (the migrations create them
// quoted), so most columns carry a sql_name.
// The `user` and `session` tables belong to the auth collaborator and are
// declared here read-only for session lookup and foreign keys.

diesel::table! {
    job_application (id) {
        id -> Int4,
        user_id -> Varchar,
        #[sql_name = "companyName"]
        company_name -> Varchar,
        position -> Varchar,
        #[sql_name = "jobLink"]
        job_link -> Varchar,
        status -> Varchar,
        #[sql_name = "applicationDate"]
        application_date -> Date,
        #[sql_name = "followupDate"]
        followup_date -> Nullable<Date>,
        #[sql_name = "interviewDate"]
        interview_date -> Nullable<Date>,
        #[sql_name = "interviewType"]
        interview_type -> Varchar,
        notes -> Text,
        salary -> Varchar,
        location -> Varchar,
        #[sql_name = "createdAt"]
        created_at -> Timestamp,
        #[sql_name = "updatedAt"]
        updated_at -> Timestamp,
    }
}

diesel::table! {
    saved_job (id) {
        id -> Int4,
        user_id -> Varchar,
        position -> Varchar,
        #[sql_name = "companyName"]
        company_name -> Varchar,
        #[sql_name = "jobLink"]
        job_link -> Varchar,
        location -> Varchar,
        salary -> Varchar,
        #[sql_name = "jobType"]
        job_type -> Varchar,
        #[sql_name = "createdAt"]
        created_at -> Timestamp,
        #[sql_name = "updatedAt"]
        updated_at -> Timestamp,
    }
}

diesel::table! {
    user (id) {
        id -> Varchar,
        name -> Varchar,
        email -> Varchar,
    }
}

diesel::table! {
    session (id) {
        id -> Varchar,
        token -> Varchar,
        #[sql_name = "userId"]
        user_id -> Varchar,
        #[sql_name = "expiresAt"]
        expires_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(session, user);

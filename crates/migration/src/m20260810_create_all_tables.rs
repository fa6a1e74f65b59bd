use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create semesters table
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semesters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Semesters::Name).string().not_null())
                    .col(ColumnDef::new(Semesters::StartDate).date().not_null())
                    .col(ColumnDef::new(Semesters::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Semesters::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Semesters::AcademicYear).string().not_null())
                    .col(
                        ColumnDef::new(Semesters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Semesters::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create periods table
        manager
            .create_table(
                Table::create()
                    .table(Periods::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Periods::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Periods::Name).string().not_null())
                    .col(ColumnDef::new(Periods::StartTime).time().not_null())
                    .col(ColumnDef::new(Periods::EndTime).time().not_null())
                    .col(ColumnDef::new(Periods::DayOfWeek).string().not_null())
                    .col(ColumnDef::new(Periods::SemesterId).uuid().not_null())
                    .col(
                        ColumnDef::new(Periods::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Periods::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-periods-semester_id")
                            .from(Periods::Table, Periods::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(ColumnDef::new(Courses::CreditHours).small_integer().not_null())
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_profiles table
        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentProfiles::FullName).string().not_null())
                    .col(
                        ColumnDef::new(StudentProfiles::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::EnrollmentYear)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_enrollments table
        manager
            .create_table(
                Table::create()
                    .table(CourseEnrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseEnrollments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseEnrollments::StudentProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseEnrollments::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseEnrollments::SemesterId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseEnrollments::Status).string().not_null())
                    .col(
                        ColumnDef::new(CourseEnrollments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseEnrollments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_enrollments-student_profile_id")
                            .from(CourseEnrollments::Table, CourseEnrollments::StudentProfileId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_enrollments-course_id")
                            .from(CourseEnrollments::Table, CourseEnrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_enrollments-semester_id")
                            .from(CourseEnrollments::Table, CourseEnrollments::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create academic_records table
        manager
            .create_table(
                Table::create()
                    .table(AcademicRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::CourseEnrollmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::StudentProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AcademicRecords::Grade).string().not_null())
                    .col(ColumnDef::new(AcademicRecords::GradePoints).float().not_null())
                    .col(
                        ColumnDef::new(AcademicRecords::CompletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-academic_records-course_enrollment_id")
                            .from(AcademicRecords::Table, AcademicRecords::CourseEnrollmentId)
                            .to(CourseEnrollments::Table, CourseEnrollments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-academic_records-student_profile_id")
                            .from(AcademicRecords::Table, AcademicRecords::StudentProfileId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create quizzes table
        manager
            .create_table(
                Table::create()
                    .table(Quizzes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Quizzes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Quizzes::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Quizzes::Title).string().not_null())
                    .col(
                        ColumnDef::new(Quizzes::TimeLimitMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Quizzes::PassThreshold)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Quizzes::Questions).json_binary().not_null())
                    .col(
                        ColumnDef::new(Quizzes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Quizzes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quizzes-course_id")
                            .from(Quizzes::Table, Quizzes::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create quiz_attempts table
        manager
            .create_table(
                Table::create()
                    .table(QuizAttempts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuizAttempts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuizAttempts::QuizId).uuid().not_null())
                    .col(
                        ColumnDef::new(QuizAttempts::StudentProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuizAttempts::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuizAttempts::EndedAt).timestamp_with_time_zone(),
                    )
                    .col(
                        ColumnDef::new(QuizAttempts::Questions)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuizAttempts::Answers).json_binary())
                    .col(ColumnDef::new(QuizAttempts::Score).small_integer())
                    .col(ColumnDef::new(QuizAttempts::IsPassed).boolean())
                    .col(ColumnDef::new(QuizAttempts::Status).string().not_null())
                    .col(ColumnDef::new(QuizAttempts::Analysis).json_binary())
                    .col(
                        ColumnDef::new(QuizAttempts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuizAttempts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quiz_attempts-quiz_id")
                            .from(QuizAttempts::Table, QuizAttempts::QuizId)
                            .to(Quizzes::Table, Quizzes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-quiz_attempts-student_profile_id")
                            .from(QuizAttempts::Table, QuizAttempts::StudentProfileId)
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create learning_resources table
        manager
            .create_table(
                Table::create()
                    .table(LearningResources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LearningResources::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LearningResources::Title).string().not_null())
                    .col(ColumnDef::new(LearningResources::Url).string().not_null())
                    .col(
                        ColumnDef::new(LearningResources::ResourceType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LearningResources::Topic).string().not_null())
                    .col(
                        ColumnDef::new(LearningResources::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LearningResources::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create learning_recommendations table
        manager
            .create_table(
                Table::create()
                    .table(LearningRecommendations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LearningRecommendations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LearningRecommendations::StudentProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LearningRecommendations::LearningResourceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LearningRecommendations::CourseId).uuid())
                    .col(
                        ColumnDef::new(LearningRecommendations::RelevanceScore)
                            .float()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LearningRecommendations::IsViewed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LearningRecommendations::IsSaved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LearningRecommendations::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(LearningRecommendations::Rating).small_integer())
                    .col(ColumnDef::new(LearningRecommendations::Feedback).text())
                    .col(
                        ColumnDef::new(LearningRecommendations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LearningRecommendations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-learning_recommendations-student_profile_id")
                            .from(
                                LearningRecommendations::Table,
                                LearningRecommendations::StudentProfileId,
                            )
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-learning_recommendations-learning_resource_id")
                            .from(
                                LearningRecommendations::Table,
                                LearningRecommendations::LearningResourceId,
                            )
                            .to(LearningResources::Table, LearningResources::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-learning_recommendations-course_id")
                            .from(
                                LearningRecommendations::Table,
                                LearningRecommendations::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create resource_interactions table
        manager
            .create_table(
                Table::create()
                    .table(ResourceInteractions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResourceInteractions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResourceInteractions::LearningRecommendationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceInteractions::StudentProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceInteractions::InteractionType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceInteractions::OccurredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resource_interactions-learning_recommendation_id")
                            .from(
                                ResourceInteractions::Table,
                                ResourceInteractions::LearningRecommendationId,
                            )
                            .to(
                                LearningRecommendations::Table,
                                LearningRecommendations::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resource_interactions-student_profile_id")
                            .from(
                                ResourceInteractions::Table,
                                ResourceInteractions::StudentProfileId,
                            )
                            .to(StudentProfiles::Table, StudentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResourceInteractions::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(LearningRecommendations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(LearningResources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuizAttempts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Quizzes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseEnrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Periods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Semesters {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    IsActive,
    AcademicYear,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Periods {
    Table,
    Id,
    Name,
    StartTime,
    EndTime,
    DayOfWeek,
    SemesterId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Code,
    Title,
    Description,
    CreditHours,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentProfiles {
    Table,
    Id,
    FullName,
    Email,
    EnrollmentYear,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseEnrollments {
    Table,
    Id,
    StudentProfileId,
    CourseId,
    SemesterId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AcademicRecords {
    Table,
    Id,
    CourseEnrollmentId,
    StudentProfileId,
    Grade,
    GradePoints,
    CompletedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Quizzes {
    Table,
    Id,
    CourseId,
    Title,
    TimeLimitMinutes,
    PassThreshold,
    Questions,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum QuizAttempts {
    Table,
    Id,
    QuizId,
    StudentProfileId,
    StartedAt,
    EndedAt,
    Questions,
    Answers,
    Score,
    IsPassed,
    Status,
    Analysis,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LearningResources {
    Table,
    Id,
    Title,
    Url,
    ResourceType,
    Topic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LearningRecommendations {
    Table,
    Id,
    StudentProfileId,
    LearningResourceId,
    CourseId,
    RelevanceScore,
    IsViewed,
    IsSaved,
    IsCompleted,
    Rating,
    Feedback,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ResourceInteractions {
    Table,
    Id,
    LearningRecommendationId,
    StudentProfileId,
    InteractionType,
    OccurredAt,
}

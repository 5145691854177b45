use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital Staff API",
        version = "0.1.0",
        description = "Staff administration backend: departments, employees, roles, shifts, qualifications, salary and leave"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Employees
        crate::handlers::employees_handler::get_employees,
        crate::handlers::employees_handler::get_employee,
        crate::handlers::employees_handler::create_employee,
        crate::handlers::employees_handler::update_employee,
        crate::handlers::employees_handler::update_legacy_shift,
        crate::handlers::employees_handler::archive_employee,
        crate::handlers::employees_handler::toggle_duty,
        crate::handlers::employees_handler::delete_employee,

        // Employee roles
        crate::handlers::employee_roles_handler::get_employee_roles,
        crate::handlers::employee_roles_handler::assign_employee_roles,
        crate::handlers::employee_roles_handler::update_employee_roles,
        crate::handlers::employee_roles_handler::remove_employee_role,

        // Employee shifts
        crate::handlers::employee_shifts_handler::get_employee_shift,
        crate::handlers::employee_shifts_handler::assign_employee_shift,
        crate::handlers::employee_shifts_handler::update_employee_shift,

        // Departments
        crate::handlers::departments_handler::get_departments,
        crate::handlers::departments_handler::get_department,
        crate::handlers::departments_handler::create_department,
        crate::handlers::departments_handler::update_department,
        crate::handlers::departments_handler::delete_department,
        crate::handlers::departments_handler::verify_department_password,
        crate::handlers::departments_handler::get_department_employees,

        // Roles
        crate::handlers::roles_handler::get_roles,
        crate::handlers::roles_handler::get_role,
        crate::handlers::roles_handler::create_role,
        crate::handlers::roles_handler::update_role,
        crate::handlers::roles_handler::delete_role,

        // Shifts
        crate::handlers::shifts_handler::get_shifts,
        crate::handlers::shifts_handler::get_shift,
        crate::handlers::shifts_handler::create_shift,
        crate::handlers::shifts_handler::update_shift,
        crate::handlers::shifts_handler::delete_shift,

        // Qualifications
        crate::handlers::qualifications_handler::get_employee_qualifications,
        crate::handlers::qualifications_handler::get_qualification,
        crate::handlers::qualifications_handler::create_qualification,
        crate::handlers::qualifications_handler::update_qualification,
        crate::handlers::qualifications_handler::delete_qualification,

        // Salary
        crate::handlers::salary_handler::get_salary,
        crate::handlers::salary_handler::get_employee_salary,
        crate::handlers::salary_handler::create_salary,
        crate::handlers::salary_handler::upsert_salary,
        crate::handlers::salary_handler::delete_salary,

        // Leave
        crate::handlers::leave_handler::get_all_leave,
        crate::handlers::leave_handler::get_employee_leave,
        crate::handlers::leave_handler::apply_leave,
        crate::handlers::leave_handler::get_leave,
        crate::handlers::leave_handler::update_leave,
        crate::handlers::leave_handler::delete_leave,
    ),
    components(
        schemas(
            // Core models
            crate::models::Employee,
            crate::models::ActiveEmployee,
            crate::models::DepartmentEmployee,
            crate::models::EmployeeProfile,
            crate::models::Department,
            crate::models::DepartmentSummary,
            crate::models::Role,
            crate::models::Shift,
            crate::models::Qualification,
            crate::models::Salary,
            crate::models::LeaveRecord,

            // Input models
            crate::models::CreateEmployeeInput,
            crate::models::UpdateEmployeeInput,
            crate::models::ArchiveEmployeeInput,
            crate::models::ShiftSelection,
            crate::models::AssignRolesInput,
            crate::models::AssignShiftInput,
            crate::models::CreateDepartmentInput,
            crate::models::UpdateDepartmentInput,
            crate::models::VerifyPasswordInput,
            crate::models::CreateRoleInput,
            crate::models::UpdateRoleInput,
            crate::models::CreateShiftInput,
            crate::models::UpdateShiftInput,
            crate::models::QualificationInput,
            crate::models::UpdateQualificationInput,
            crate::models::SalaryInput,
            crate::models::LeaveInput,

            // Responses
            crate::models::MessageResponse,
            crate::models::EmployeeCreatedResponse,
            crate::models::DepartmentCreatedResponse,
            crate::models::VerifyPasswordResponse,
            crate::models::RoleCreatedResponse,
            crate::models::ShiftCreatedResponse,
            crate::models::QualificationCreatedResponse,
            crate::models::SalaryCreatedResponse,
            crate::models::LeaveCreatedResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "employees", description = "Employee records and lifecycle"),
        (name = "employee-roles", description = "Role assignment with replace semantics"),
        (name = "employee-shifts", description = "Single shift assignment"),
        (name = "departments", description = "Departments and PIN-gated access"),
        (name = "roles", description = "Role catalog"),
        (name = "shifts", description = "Shift patterns"),
        (name = "qualifications", description = "Employee qualifications"),
        (name = "salary", description = "Employee salary"),
        (name = "leave", description = "Leave records"),
    )
)]
pub struct ApiDoc;
